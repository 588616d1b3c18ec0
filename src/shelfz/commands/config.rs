use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run<S: CatalogStore>(store: &mut S, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = store.load_config()?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = store.load_config()?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = store.load_config()?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            store.save_config(&config)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortBy;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn set_persists_through_the_store() {
        let mut store = InMemoryStore::new();
        run(&mut store, ConfigAction::Set("sort".into(), "progress".into())).unwrap();
        assert_eq!(store.load_config().unwrap().sort_by, SortBy::Progress);
    }

    #[test]
    fn set_overwrites_the_whole_document() {
        let mut store = InMemoryStore::new();
        run(&mut store, ConfigAction::Set("api-key".into(), "k1".into())).unwrap();
        run(&mut store, ConfigAction::Set("sort".into(), "series".into())).unwrap();

        let config = store.load_config().unwrap();
        assert_eq!(config.api_key, "k1");
        assert_eq!(config.sort_by, SortBy::Series);
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }

    #[test]
    fn show_all_returns_the_config() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }
}
