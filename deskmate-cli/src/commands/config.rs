use anyhow::{Context, Result};
use shared::config::ClientConfig;

const REDACTED: &str = "********";

/// Prints the resolved configuration in `format`, hiding the access token.
pub fn print_config(config: &ClientConfig, format: &str) -> Result<()> {
    let rendered = redacted(config)
        .render(format)
        .with_context(|| format!("failed to render configuration as {format}"))?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn redacted(config: &ClientConfig) -> ClientConfig {
    ClientConfig {
        access_token: config.access_token.as_ref().map(|_| REDACTED.to_string()),
        ..config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_hidden() {
        let config = ClientConfig {
            access_token: Some("secret".into()),
            ..ClientConfig::for_url("https://support.example.com/api")
        };
        let rendered = redacted(&config).render("json").unwrap();
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn missing_token_stays_missing() {
        assert_eq!(redacted(&ClientConfig::default()).access_token, None);
    }
}
