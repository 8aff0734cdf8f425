use dirs::home_dir;
use std::path::PathBuf;

pub const PICKFILL_HOME_ENV: &str = "PICKFILL_HOME";

/// Returns the pickfill configuration directory: `$PICKFILL_HOME` when set,
/// otherwise `~/.pickfill`.
///
/// - If `PICKFILL_HOME` is set, the value must exist and be a directory. The
///   value is canonicalized and this function errs otherwise.
/// - The default location is not required to exist.
pub fn find_pickfill_home() -> std::io::Result<PathBuf> {
    let home_env = std::env::var(PICKFILL_HOME_ENV)
        .ok()
        .filter(|val| !val.is_empty());
    find_pickfill_home_from_env(home_env.as_deref())
}

pub(crate) fn find_pickfill_home_from_env(home_env: Option<&str>) -> std::io::Result<PathBuf> {
    let Some(val) = home_env else {
        let mut path = home_dir().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not find home directory",
            )
        })?;
        path.push(".pickfill");
        return Ok(path);
    };

    let path = PathBuf::from(val);
    let metadata = std::fs::metadata(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{PICKFILL_HOME_ENV} points to {val:?}, but that path does not exist"),
        ),
        _ => std::io::Error::new(
            err.kind(),
            format!("failed to read {PICKFILL_HOME_ENV} {val:?}: {err}"),
        ),
    })?;
    if !metadata.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{PICKFILL_HOME_ENV} points to {val:?}, but that path is not a directory"),
        ));
    }
    path.canonicalize().map_err(|err| {
        std::io::Error::new(
            err.kind(),
            format!("failed to canonicalize {PICKFILL_HOME_ENV} {val:?}: {err}"),
        )
    })
}
