// Wraps the serialized command line in an `alias` statement

use super::serializer::{serialize, Settings};

/// The program the alias ends up calling
pub const PROGRAM_NAME: &str = "ideaseed";

/// Build `alias NAME='ideaseed ...'` for the given settings
///
/// Single quotes already present in the command line (from quoted values) are
/// turned into `\'` with one flat substitution, not a second `quote()` pass.
pub fn build_alias(settings: &Settings, alias_name: &str) -> String {
    let cmdline = serialize(PROGRAM_NAME, settings).replace('\'', "\\'");
    format!("alias {}='{}'", alias_name, cmdline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_alias_plain() {
        let settings = Settings::new()
            .with("--no-self-assign", true)
            .with("--default-column", "Backlog");

        assert_eq!(
            build_alias(&settings, "idea"),
            "alias idea='ideaseed --no-self-assign --default-column=Backlog'"
        );
    }

    #[test]
    fn test_build_alias_flattens_quotes() {
        let settings = Settings::new()
            .with("--ab", 4u32)
            .with("--bb", "yes")
            .with("--cb", true)
            .with("--db", false)
            .with("--eb", vec!["5".to_string(), "fefez$$/./!**fe".to_string()])
            .with("thingie", true)
            .with("nothingie", false)
            .with("SHOUT", ":thinking:");

        assert_eq!(
            build_alias(&settings, "idea"),
            concat!(
                r"alias idea='ideaseed --ab --ab --ab --ab --bb=yes --cb ",
                r"--eb=5 --eb=\'fefez$$/./!**fe\' thingie :thinking:'"
            )
        );
    }

    #[test]
    fn test_build_alias_no_recursive_escaping() {
        let settings = Settings::new().with("--title", "it's");
        let alias = build_alias(&settings, "i");

        // quote() gives 'it'"'"'s', each ' then becomes \'
        assert_eq!(alias, r#"alias i='ideaseed --title=\'it\'"\'"\'s\''"#);
        assert!(!alias.contains(r"\\'"));
    }

    #[test]
    fn test_build_alias_empty_settings() {
        assert_eq!(build_alias(&Settings::new(), "idea"), "alias idea='ideaseed'");
    }
}
