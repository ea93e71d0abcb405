//! Module containing drive cycle struct and related functions.

// local
use crate::imports::*;
use crate::utils::*;

fn default_dt_s() -> f64 {
    1.0
}

/// Single sample of a drive cycle as read from or written to CSV.
#[derive(Default, PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct CycleElement {
    /// speed [m/s]
    #[serde(alias = "Speed")]
    #[serde(alias = "speed_mps")]
    pub mps: f64,
}

/// Fixed-step speed trace.
///
/// * mps, vehicle speed, $\frac{m}{s}$
/// * dt_s, uniform step between consecutive samples, $s$
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DriveCycle {
    /// array of speed [m/s]
    #[serde(alias = "speed_mps")]
    pub mps: Array1<f64>,
    /// uniform time step between samples [s]
    #[serde(default = "default_dt_s")]
    pub dt_s: f64,
    #[serde(default)]
    pub name: String,
}

impl Default for DriveCycle {
    fn default() -> Self {
        Self {
            mps: Array::zeros(0),
            dt_s: default_dt_s(),
            name: String::default(),
        }
    }
}

impl SerdeAPI for DriveCycle {
    const ACCEPTED_BYTE_FORMATS: &'static [&'static str] = &["yaml", "json", "bin", "csv"];
    const ACCEPTED_STR_FORMATS: &'static [&'static str] = &["yaml", "json", "csv"];

    fn init(&mut self) -> anyhow::Result<()> {
        self.init_checks()
    }

    fn to_writer<W: std::io::Write>(&self, wtr: W, format: &str) -> anyhow::Result<()> {
        match format.trim_start_matches('.').to_lowercase().as_str() {
            "yaml" | "yml" => serde_yaml::to_writer(wtr, self)?,
            "json" => serde_json::to_writer(wtr, self)?,
            "bin" => bincode::serialize_into(wtr, self)?,
            "csv" => {
                let mut wtr = csv::Writer::from_writer(wtr);
                for i in 0..self.len() {
                    wtr.serialize(CycleElement { mps: self.mps[i] })?;
                }
                wtr.flush()?
            }
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_BYTE_FORMATS
            ),
        }
        Ok(())
    }

    fn to_str(&self, format: &str) -> anyhow::Result<String> {
        Ok(
            match format.trim_start_matches('.').to_lowercase().as_str() {
                "yaml" | "yml" => self.to_yaml()?,
                "json" => self.to_json()?,
                "csv" => self.to_csv()?,
                _ => {
                    bail!(
                        "Unsupported format {format:?}, must be one of {:?}",
                        Self::ACCEPTED_STR_FORMATS
                    )
                }
            },
        )
    }

    /// Note that using this method to instantiate a cycle from CSV, rather
    /// than the `from_csv_str` method, sets the cycle name to an empty string
    fn from_str<S: AsRef<str>>(contents: S, format: &str) -> anyhow::Result<Self> {
        Ok(
            match format.trim_start_matches('.').to_lowercase().as_str() {
                "yaml" | "yml" => Self::from_yaml(contents)?,
                "json" => Self::from_json(contents)?,
                "csv" => Self::from_reader(contents.as_ref().as_bytes(), "csv")?,
                _ => bail!(
                    "Unsupported format {format:?}, must be one of {:?}",
                    Self::ACCEPTED_STR_FORMATS
                ),
            },
        )
    }

    fn from_reader<R: std::io::Read>(rdr: R, format: &str) -> anyhow::Result<Self> {
        let mut deserialized = match format.trim_start_matches('.').to_lowercase().as_str() {
            "yaml" | "yml" => serde_yaml::from_reader(rdr)?,
            "json" => serde_json::from_reader(rdr)?,
            "bin" => bincode::deserialize_from(rdr)?,
            "csv" => {
                // Create empty cycle to be populated
                let mut cyc = Self::default();
                let mut rdr = csv::Reader::from_reader(rdr);
                for result in rdr.deserialize() {
                    cyc.push(result?);
                }
                cyc
            }
            _ => {
                bail!(
                    "Unsupported format {format:?}, must be one of {:?}",
                    Self::ACCEPTED_BYTE_FORMATS
                )
            }
        };
        deserialized.init()?;
        Ok(deserialized)
    }
}

impl DriveCycle {
    fn init_checks(&self) -> anyhow::Result<()> {
        ensure!(!self.is_empty(), "Deserialized cycle is empty");
        ensure!(self.dt_s > 0.0, format_dbg!(self.dt_s));
        ensure!(
            self.mps.iter().all(|v| v.is_finite()),
            "Deserialized cycle contains non-finite speed samples"
        );
        ensure!(
            ndarrmin(&self.mps) >= 0.0,
            "Deserialized cycle contains negative speed samples"
        );
        Ok(())
    }

    /// Load cycle from CSV file, parsing name from filepath
    pub fn from_csv_file<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let name = filepath
            .file_stem()
            .and_then(OsStr::to_str)
            .with_context(|| format!("Could not parse cycle name from filepath: {filepath:?}"))?
            .to_string();
        let mut cyc = Self::from_file(filepath)?;
        cyc.name = name;
        Ok(cyc)
    }

    /// Load cycle from CSV string
    pub fn from_csv_str<S: AsRef<str>>(csv_str: S, name: String) -> anyhow::Result<Self> {
        let mut cyc = Self::from_str(csv_str, "csv")?;
        cyc.name = name;
        Ok(cyc)
    }

    /// Write (serialize) cycle to a CSV string
    pub fn to_csv(&self) -> anyhow::Result<String> {
        let mut buf = Vec::with_capacity(self.len());
        self.to_writer(&mut buf, "csv")?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn push(&mut self, cyc_elem: CycleElement) {
        self.mps
            .append(Axis(0), array![cyc_elem.mps].view())
            .unwrap();
    }

    pub fn len(&self) -> usize {
        self.mps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// total trace duration [s]
    pub fn duration_s(&self) -> f64 {
        self.len() as f64 * self.dt_s
    }

    /// distance covered in each time step [m]
    pub fn dist_m(&self) -> Array1<f64> {
        &self.mps * self.dt_s
    }

    pub fn test_cyc() -> Self {
        Self {
            mps: Array::range(0.0, 10.0, 1.0),
            dt_s: 1.0,
            name: String::from("test"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist() {
        let cyc = DriveCycle::test_cyc();
        assert_eq!(cyc.dist_m().sum(), 45.0);
        assert_eq!(cyc.duration_s(), 10.0);
    }

    #[test]
    fn test_csv_roundtrip() {
        let cyc = DriveCycle::test_cyc();
        let csv_str = cyc.to_csv().unwrap();
        let cyc2 = DriveCycle::from_csv_str(&csv_str, String::from("test")).unwrap();
        assert_eq!(cyc, cyc2);
    }

    #[test]
    fn test_csv_speed_column_alias() {
        let csv_str = "Speed\n0.0\n5.0\n10.0\n";
        let cyc = DriveCycle::from_csv_str(csv_str, String::from("aliased")).unwrap();
        assert_eq!(cyc.len(), 3);
        assert_eq!(cyc.mps[2], 10.0);
    }

    #[test]
    fn test_negative_speed_rejected() {
        let csv_str = "mps\n0.0\n-1.0\n";
        assert!(DriveCycle::from_csv_str(csv_str, String::from("bad")).is_err());
    }

    #[test]
    fn test_empty_cycle_rejected() {
        assert!(DriveCycle::from_csv_str("mps\n", String::from("empty")).is_err());
    }

    #[test]
    fn test_str_serde() {
        let cyc = DriveCycle::test_cyc();
        for format in DriveCycle::ACCEPTED_STR_FORMATS {
            let ser = cyc.to_str(format).unwrap();
            DriveCycle::from_str(&ser, format).unwrap();
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let cyc = DriveCycle::test_cyc();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.yaml");
        cyc.to_file(&path).unwrap();
        let cyc2 = DriveCycle::from_file(&path).unwrap();
        assert_eq!(cyc, cyc2);
    }

    #[cfg(feature = "resources")]
    #[test]
    fn test_loading_a_cycle_from_resources() {
        let cyc = DriveCycle::from_resource("cycles/udds_abridged.csv").unwrap();
        assert_eq!(cyc.len(), 60);
        assert_eq!(crate::utils::ndarrmax(&cyc.mps), 13.4);
    }
}
