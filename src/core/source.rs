use crate::core::endpoints::Endpoints;
use crate::core::errors::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Endpoint Source
-------------------------------------------------------------------------------------------------*/

/// Something that yields a freshly parsed endpoint directory on every call.
pub trait EndpointSource {
    fn endpoints(&self) -> Result<Endpoints>;
}

/*-------------------------------------------------------------------------------------------------
  File Source
-------------------------------------------------------------------------------------------------*/

/// Reads the endpoint directory from a local JSON file, e.g. a saved copy of the web service
/// response. The file is re-read on every call.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EndpointSource for FileSource {
    fn endpoints(&self) -> Result<Endpoints> {
        info!("Read endpoint directory from: {:?}", &self.path);
        let json = fs::read_to_string(&self.path)?;
        Endpoints::from_json(&json)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{log_error, Error};
    use crate::core::json::tests::TEST_ENDPOINTS_JSON;

    /// FILE: ./scratch/test_file_source.json
    #[test]
    fn test_file_source() {
        let path: PathBuf = [".", "scratch", "test_file_source.json"].iter().collect();
        fs::create_dir_all("./scratch").unwrap();
        fs::write(&path, TEST_ENDPOINTS_JSON).unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.path(), path.as_path());

        let endpoints = source.endpoints().inspect_err(log_error).unwrap();
        assert_eq!(endpoints.len(), 6);
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("./scratch/does-not-exist.json");
        assert!(matches!(source.endpoints(), Err(Error::Io(_))));
    }

    /// FILE: ./scratch/test_file_source_invalid_json.json
    #[test]
    fn test_file_source_invalid_json() {
        let path: PathBuf = [".", "scratch", "test_file_source_invalid_json.json"]
            .iter()
            .collect();
        fs::create_dir_all("./scratch").unwrap();
        fs::write(&path, "<html>Service Unavailable</html>").unwrap();

        let result = FileSource::new(&path).endpoints();
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
