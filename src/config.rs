use std::path::PathBuf;

use log::debug;

const APP_DIR: &str = "banner-cli";

/// System locations FIGlet packages usually install fonts into.
const SYSTEM_FONT_DIRS: &[&str] = &["/usr/local/share/figlet", "/usr/share/figlet"];

/// Where the font library looks for `*.flf` files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontConfig {
    pub search_dirs: Vec<PathBuf>,
}

impl FontConfig {
    /// An explicit directory replaces the default search path entirely.
    pub fn resolve(font_dir: Option<PathBuf>) -> Self {
        let search_dirs = match font_dir {
            Some(dir) => vec![dir],
            None => Self::default_dirs(),
        };
        debug!("font search path: {:?}", search_dirs);
        Self { search_dirs }
    }

    fn default_dirs() -> Vec<PathBuf> {
        let mut search = Vec::new();
        if let Some(data) = dirs::data_dir() {
            search.push(data.join(APP_DIR).join("fonts"));
        }
        search.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
        search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_is_the_only_search_dir() {
        let cfg = FontConfig::resolve(Some(PathBuf::from("/tmp/fonts")));
        assert_eq!(cfg.search_dirs, vec![PathBuf::from("/tmp/fonts")]);
    }

    #[test]
    fn default_path_ends_with_system_dirs() {
        let cfg = FontConfig::resolve(None);
        let tail: Vec<_> = cfg
            .search_dirs
            .iter()
            .rev()
            .take(2)
            .rev()
            .cloned()
            .collect();
        assert_eq!(
            tail,
            vec![
                PathBuf::from("/usr/local/share/figlet"),
                PathBuf::from("/usr/share/figlet")
            ]
        );
    }
}
