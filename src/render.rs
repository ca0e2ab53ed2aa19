//! HTML notification emails for the two forms.
//!
//! Every user supplied value is HTML-escaped before it is embedded. Newlines in the
//! free-text fields become `<br>` after escaping, and the subject line has control
//! characters stripped so a submitter can't smuggle extra headers into it.

use crate::domain::{ContactSubmission, SubscriptionSubmission};

/// A rendered notification, ready to hand to the email client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

const CELL_LABEL: &str = "padding: 12px; background: #f8f9fa; font-weight: bold; border: 1px solid #e8e8e8;";
const CELL_VALUE: &str = "padding: 12px; border: 1px solid #e8e8e8;";

/// Render the notification for a detailed inquiry.
pub fn render_contact(submission: &ContactSubmission) -> RenderedEmail {
    let subject = subject_line(&format!(
        "New Detailed Inquiry from {} at {}",
        submission.name, submission.company
    ));

    let email = html_escape(submission.email.as_ref());
    let phone = submission
        .phone
        .as_deref()
        .map(html_escape)
        .unwrap_or_else(|| "Not provided".to_string());

    let rows = [
        ("Name", html_escape(&submission.name)),
        ("Email", format!(r#"<a href="mailto:{email}">{email}</a>"#)),
        ("Phone", phone),
        ("Company", html_escape(&submission.company)),
        ("Position", html_escape(&submission.position)),
    ]
    .iter()
    .enumerate()
    // The first label cell sets the column width for the whole table.
    .map(|(i, (label, value))| row(label, value, i == 0))
    .collect::<Vec<_>>()
    .join("\n");

    let additional = submission
        .additional
        .as_deref()
        .map(|text| text_block("Additional Information", "#666", text))
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #6366f1; border-bottom: 2px solid #6366f1; padding-bottom: 10px;">New Detailed Contact Form Submission</h2>
    <h3 style="color: #1a1a1a; margin-top: 24px;">Contact Information</h3>
    <table style="width: 100%; border-collapse: collapse;">
{rows}
    </table>
{challenges}
{goals}
{additional}
    <p style="margin-top: 30px; color: #666; font-size: 12px;">This message was sent from the Linear Marketing Solutions contact page.</p>
</div>"#,
        challenges = text_block("Marketing Challenges", "#6366f1", &submission.challenges),
        goals = text_block("Primary Goals", "#a855f7", &submission.goals),
    );

    RenderedEmail { subject, html }
}

/// Render the notification for a new subscriber.
pub fn render_subscription(submission: &SubscriptionSubmission) -> RenderedEmail {
    let email = html_escape(submission.email.as_ref());
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #6366f1;">New Email Subscriber</h2>
    <p style="font-size: 16px;">Someone has subscribed via the website:</p>
    <div style="background: #f8f9fa; padding: 16px; border-radius: 8px; margin-top: 16px;">
        <strong>Email:</strong> <a href="mailto:{email}">{email}</a>
    </div>
    <p style="margin-top: 20px; color: #666; font-size: 12px;">Captured from the hero section email form.</p>
</div>"#
    );

    RenderedEmail {
        subject: "New Email Subscriber".to_string(),
        html,
    }
}

fn row(label: &str, value: &str, sets_width: bool) -> String {
    let width = if sets_width { " width: 140px;" } else { "" };
    format!(
        r#"        <tr>
            <td style="{CELL_LABEL}{width}">{label}</td>
            <td style="{CELL_VALUE}">{value}</td>
        </tr>"#
    )
}

/// A headed block for one of the multi-line fields.
fn text_block(heading: &str, accent: &str, text: &str) -> String {
    format!(
        r#"    <div style="margin-top: 24px;">
        <h3 style="color: #1a1a1a; margin-bottom: 12px;">{heading}</h3>
        <div style="background: #f8f9fa; padding: 16px; border-radius: 8px; border-left: 4px solid {accent};">{}</div>
    </div>"#,
        line_breaks(&html_escape(text))
    )
}

fn line_breaks(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\n', "<br>")
}

fn subject_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
