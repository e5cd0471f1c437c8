// src/proxy.rs
use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// The jboski grammar-checker mirror endpoint.
const JBOSKI_MIRROR_URL: &str = "https://vudrux.site/jboski/mirror.php";

/// Timeout for the single mirror request. There is no retry.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Entities left encoded so the fragment stays safe to embed: decoding
/// them would turn response text into markup.
const KEEP_ENCODED: [&str; 4] = ["lt", "gt", "quot", "amp"];

/// Client for the `jboski` command: forwards the user's text to the
/// mirror and returns the (entity-decoded) HTML fragment it renders.
pub struct JboskiClient {
    http_client: Client,
    base_url: String,
}

impl JboskiClient {
    pub fn new() -> Self {
        Self::with_base_url(JBOSKI_MIRROR_URL.to_string())
    }

    /// Point the client at a different mirror, e.g. from `JBOSKI_URL`.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    /// One GET against the mirror. Network failures and non-success
    /// statuses surface as errors for the command layer to print.
    pub async fn check(&self, text: &str) -> Result<String> {
        debug!(text_len = text.len(), "querying jboski mirror");
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("text", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "jboski mirror refused the request");
            return Err(Error::Proxy(format!("jboski mirror returned {status}")));
        }

        let body = response.text().await?;
        debug!(body_len = body.len(), "jboski mirror answered");
        Ok(decode_entities(&body))
    }
}

impl Default for JboskiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes named HTML entities in the mirror's output, leaving the four
/// markup-significant ones and anything unrecognized untouched. Numeric
/// references pass through unchanged as well.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        let (before, tail) = rest.split_at(pos);
        out.push_str(before);
        match entity_at(tail) {
            Some((name, len)) if KEEP_ENCODED.contains(&name) => {
                out.push_str(&tail[..len]);
                rest = &tail[len..];
            }
            Some((name, len)) => {
                if let Some(decoded) = named_entity(name) {
                    out.push(decoded);
                } else {
                    out.push_str(&tail[..len]);
                }
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Matches `&name;` at the start of `tail` (which begins with `&`) and
/// returns the name plus the total matched length.
fn entity_at(tail: &str) -> Option<(&str, usize)> {
    let body = &tail[1..];
    let end = body.find(';')?;
    let name = &body[..end];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some((name, end + 2))
}

/// The named entities jboski output has been seen to use. Unknown names
/// stay encoded rather than being guessed at.
fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "nbsp" => '\u{a0}',
        "apos" => '\'',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "eacute" => 'é',
        "egrave" => 'è',
        "ecirc" => 'ê',
        "aacute" => 'á',
        "agrave" => 'à',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "ccedil" => 'ç',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "auml" => 'ä',
        "copy" => '©',
        "deg" => '°',
        "middot" => '·',
        "times" => '×',
        _ => return None,
    })
}

/// Wraps the decoded fragment in the inline-styled page the command
/// replies with.
pub fn render_page(fragment: &str) -> String {
    format!(
        r##"<html>
<style>
body {{
  margin: 0.5em;
  font-family: sans-serif;
}}
#output {{
  overflow-wrap: break-word;
  display: inline-block;
  max-width: 32em;
}}
#output .translationerror {{
  border: 1px solid #a88;
  background: #fcc;
  padding: 1rem;
  white-space: pre-wrap;
}}
#output .small {{
  font-size: small;
}}
#output .sumtiplace {{
  color: maroon;
  font-size: small;
}}
#output .parenmark {{
  font-size: xx-small;
}}
#output .translation {{
  color: #00f;
}}
</style>
<div id="output">{fragment}</div>
</html>"##
    )
}
