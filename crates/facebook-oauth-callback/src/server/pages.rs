//! HTML pages rendered into the OAuth popup window.
//!
//! Both outcomes are served with HTTP 200 so the popup renders the message
//! itself instead of a browser error screen. Each page counts down from
//! 10 seconds and then closes itself.
//!
//! All interpolated text is HTML-escaped to prevent XSS; the error text in
//! particular is provider-supplied.

use crate::models::Page;

/// Seconds before the popup closes itself.
const AUTO_CLOSE_SECONDS: u32 = 10;

/// Countdown + close script shared by both pages.
fn countdown_script() -> String {
    format!(
        r"<script>
let countdown = {AUTO_CLOSE_SECONDS};
function updateCountdown() {{
    document.getElementById('countdown').textContent = countdown;
    countdown--;
    if (countdown < 0) {{ closeWindow(); }}
}}
function closeWindow() {{
    try {{ window.close(); }}
    catch(e) {{ alert('Please close this window manually (Ctrl+W or Cmd+W)'); }}
}}
window.onload = function() {{ setInterval(updateCountdown, 1000); }};
</script>"
    )
}

/// Render the success page: one list item per page, plus the subject id the
/// record was stored under.
pub fn render_success_page(pages: &[Page], subject_id: Option<&str>) -> String {
    let mut page_items = String::new();
    for page in pages {
        page_items.push_str(&format!(
            "<li><strong>{}</strong> (ID: {})</li>",
            html_escape(&page.name),
            html_escape(&page.id)
        ));
    }

    let subject_line = subject_id
        .map(|id| format!("<p><strong>User ID:</strong> {}</p>", html_escape(id)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Facebook Authorization Complete</title>
<style>
body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }}
.success {{ color: #4CAF50; }}
.container {{ text-align: center; }}
ul {{ text-align: left; }}
.countdown {{ font-size: 18px; font-weight: bold; color: #FF6B35; }}
button {{ padding: 12px 24px; background-color: #4CAF50; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 16px; font-weight: bold; }}
</style>
{script}
</head>
<body>
<div class="container">
<h1 class="success">Facebook Authorization Complete!</h1>
<p>Successfully connected your Facebook account!</p>
<h3>Available Pages:</h3>
<ul>{page_items}</ul>
{subject_line}
<p class="countdown">This window will close automatically in <span id="countdown">{seconds}</span> seconds</p>
<button onclick="closeWindow()">Close Window</button>
<p style="font-size: 12px; color: #666; margin-top: 10px;">Or close manually with Ctrl+W (Windows) or Cmd+W (Mac)</p>
</div>
</body>
</html>"#,
        script = countdown_script(),
        page_items = page_items,
        subject_line = subject_line,
        seconds = AUTO_CLOSE_SECONDS,
    )
}

/// Render the failure page for a titled error message.
pub fn render_failure_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; text-align: center; }}
.error {{ color: #d32f2f; }}
.container {{ background-color: #ffebee; padding: 20px; border-radius: 8px; }}
button {{ padding: 12px 24px; background-color: #d32f2f; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 16px; font-weight: bold; margin-top: 15px; }}
.countdown {{ font-size: 18px; font-weight: bold; color: #d32f2f; }}
</style>
{script}
</head>
<body>
<div class="container">
<h1 class="error">{title}</h1>
<p><strong>Error:</strong> {message}</p>
<p class="countdown">This window will close automatically in <span id="countdown">{seconds}</span> seconds</p>
<button onclick="closeWindow()">Close Window</button>
<p style="font-size: 12px; color: #666; margin-top: 10px;">Or close manually with Ctrl+W (Windows) or Cmd+W (Mac)</p>
</div>
</body>
</html>"#,
        title = html_escape(title),
        message = html_escape(message),
        script = countdown_script(),
        seconds = AUTO_CLOSE_SECONDS,
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("xss")</script>"#),
            "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_success_page_lists_pages_and_subject() {
        let pages = vec![
            Page { id: "1".into(), name: "Page One".into() },
            Page { id: "2".into(), name: "Page Two".into() },
        ];
        let html = render_success_page(&pages, Some("subject-1"));

        assert!(html.contains("<strong>Page One</strong> (ID: 1)"));
        assert!(html.contains("<strong>Page Two</strong> (ID: 2)"));
        assert!(html.contains("subject-1"));
        assert!(html.contains("closeWindow"));
    }

    #[test]
    fn test_success_page_without_subject() {
        let html = render_success_page(&[], None);
        assert!(!html.contains("User ID"));
    }

    #[test]
    fn test_success_page_escapes_page_names() {
        let pages = vec![Page { id: "1".into(), name: "<b>Bold</b>".into() }];
        let html = render_success_page(&pages, None);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_failure_page_escapes_provider_text() {
        let html = render_failure_page("Authorization Failed", "<img src=x onerror=alert(1)>");
        assert!(html.contains("Authorization Failed"));
        assert!(html.contains("&lt;img"));
        assert!(!html.contains("<img"));
    }
}
