use crate::workflows::DEFAULT_BATCH_SIZE;

pub const BATCH_SIZE_ENV_VAR: &str = "BATCH_SIZE";

/// Settings read from the environment (after loading `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierSettings {
    pub batch_size: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ClassifierSettings {
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        match dotenvy::var(BATCH_SIZE_ENV_VAR) {
            Ok(value) => Self::from_batch_size(&value),
            Err(_) => {
                crate::trace!("{BATCH_SIZE_ENV_VAR} not set. Using {DEFAULT_BATCH_SIZE}");
                Ok(Self::default())
            }
        }
    }

    fn from_batch_size(value: &str) -> crate::Result<Self> {
        let batch_size: usize = value.trim().parse().map_err(|_| {
            crate::anyhow!("{BATCH_SIZE_ENV_VAR} must be a positive integer, got {value:?}")
        })?;
        if batch_size == 0 {
            crate::bail!("{BATCH_SIZE_ENV_VAR} must be a positive integer, got 0");
        }
        Ok(Self { batch_size })
    }
}
