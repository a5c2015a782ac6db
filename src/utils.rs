//! Utility helpers shared across the WASM frontend.

use unicode_segmentation::UnicodeSegmentation;

/// Return the current timestamp in **milliseconds** since UNIX epoch.
///
/// chrono's `wasmbind` feature reads `Date.now()` in the browser and the
/// system clock everywhere else, so the same call works in unit tests.
pub fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Escape text for interpolation into `inner_html` templates.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Truncate to at most `max` user-perceived characters, appending an
/// ellipsis when something was cut.  Works on grapheme clusters so CJK and
/// emoji never get split in half.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    let graphemes: Vec<&str> = s.graphemes(true).collect();
    if graphemes.len() <= max {
        s.to_string()
    } else {
        let mut out: String = graphemes[..max].concat();
        out.push('…');
        out
    }
}

/// Number of user-perceived characters (the prompt box counter shows this).
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Percent-encode a query component (RFC 3986 unreserved set passes through).
pub fn encode_query_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Capitalise the first letter of a &str.
pub fn capitalise_first(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Human "time ago" label for an RFC 3339 timestamp.  Unparseable input is
/// returned unchanged so server-formatted strings still display.
pub fn format_relative_time(timestamp: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let Ok(then) = chrono::DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    let then = then.with_timezone(&chrono::Utc);
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if minutes < 1 {
        "刚刚".to_string()
    } else if hours < 1 {
        format!("{} 分钟前", minutes)
    } else if days < 1 {
        format!("{} 小时前", hours)
    } else if days == 1 {
        "昨天".to_string()
    } else if days < 7 {
        format!("{} 天前", days)
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn truncate_keeps_cjk_intact() {
        assert_eq!(truncate_graphemes("赛博朋克城市", 4), "赛博朋克…");
        assert_eq!(truncate_graphemes("short", 10), "short");
    }

    #[test]
    fn query_encoding() {
        assert_eq!(encode_query_component("neon city"), "neon%20city");
        assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_component("图像"), "%E5%9B%BE%E5%83%8F");
    }

    #[test]
    fn capitalise() {
        assert_eq!(capitalise_first("draft"), "Draft");
        assert_eq!(capitalise_first(""), "");
    }

    #[test]
    fn relative_time_buckets() {
        use chrono::TimeZone;
        let now = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time("2024-01-15T11:59:30Z", now), "刚刚");
        assert_eq!(format_relative_time("2024-01-15T11:45:00Z", now), "15 分钟前");
        assert_eq!(format_relative_time("2024-01-15T10:00:00Z", now), "2 小时前");
        assert_eq!(format_relative_time("2024-01-14T10:00:00Z", now), "昨天");
        assert_eq!(format_relative_time("2024-01-12T12:00:00Z", now), "3 天前");
        assert_eq!(format_relative_time("2023-12-01T00:00:00Z", now), "2023-12-01");
        assert_eq!(format_relative_time("2 小时前", now), "2 小时前");
    }
}
