/// Redact the bot token embedded in a Telegram API URL so it never
/// reaches the logs.
pub fn mask_bot_url(url: &str) -> String {
    if let Some(start) = url.find("/bot") {
        let token_start = start + 4;
        let token_end = url[token_start..]
            .find('/')
            .map(|i| token_start + i)
            .unwrap_or(url.len());
        return format!("{}***{}", &url[..token_start], &url[token_end..]);
    }
    "***".to_string()
}

#[cfg(test)]
mod tests {
    use super::mask_bot_url;

    #[test]
    fn masks_bot_token() {
        let url = "https://api.telegram.org/bot12345:SECRET/sendMessage";
        let masked = mask_bot_url(url);
        assert_eq!(masked, "https://api.telegram.org/bot***/sendMessage");
        assert!(!masked.contains("SECRET"));
    }

    #[test]
    fn masks_token_without_trailing_path() {
        let url = "https://api.telegram.org/bot12345:SECRET";
        assert_eq!(mask_bot_url(url), "https://api.telegram.org/bot***");
    }

    #[test]
    fn returns_generic_for_other_urls() {
        assert_eq!(mask_bot_url("https://example.com/api"), "***");
    }
}
