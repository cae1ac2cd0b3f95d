use chrono::{DateTime, Utc};

use super::model::Submission;
use crate::email::EmailMessage;

pub fn subject_for(name: &str) -> String {
  format!("Portfolio Contact: Message from {}", name)
}

/// Submitted text is embedded as-is, without HTML escaping.
pub fn render_html_body(submission: &Submission, received_at: DateTime<Utc>) -> String {
  format!(
    r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 10px;">
  <h2 style="color: #8A2BE2; border-bottom: 2px solid #00E7FF; padding-bottom: 10px;">
    New Contact Form Submission
  </h2>

  <div style="margin: 20px 0;">
    <p style="margin: 10px 0;">
      <strong style="color: #333;">Name:</strong>
      <span style="color: #666;">{name}</span>
    </p>
    <p style="margin: 10px 0;">
      <strong style="color: #333;">Email:</strong>
      <span style="color: #666;">{email}</span>
    </p>
  </div>

  <div style="background-color: #f9f9f9; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <strong style="color: #333;">Message:</strong>
    <p style="color: #666; line-height: 1.6; margin-top: 10px;">
      {message}
    </p>
  </div>

  <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e0e0e0; text-align: center; color: #999; font-size: 12px;">
    <p>This email was sent from your portfolio website contact form.</p>
    <p>Received at: {received_at}</p>
  </div>
</div>
"#,
    name = submission.name,
    email = submission.email,
    message = submission.message,
    received_at = received_at.format("%-m/%-d/%Y, %-I:%M:%S %p UTC"),
  )
}

pub fn render_contact_email(submission: &Submission, from: &str, to: &str, received_at: DateTime<Utc>) -> EmailMessage {
  EmailMessage {
    from: from.to_string(),
    to: to.to_string(),
    reply_to: submission.email.clone(),
    subject: subject_for(&submission.name),
    html_body: render_html_body(submission, received_at),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn submission() -> Submission {
    Submission {
      name: "Ada".to_string(),
      email: "ada@example.com".to_string(),
      message: "Hello <b>there</b>".to_string(),
    }
  }

  #[test]
  fn render_contact_email_addresses_the_owner() {
    let received_at = Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap();
    let email = render_contact_email(&submission(), "owner@example.com", "inbox@example.com", received_at);

    assert_eq!(email.from, "owner@example.com");
    assert_eq!(email.to, "inbox@example.com");
    assert_eq!(email.reply_to, "ada@example.com");
    assert_eq!(email.subject, "Portfolio Contact: Message from Ada");
  }

  #[test]
  fn html_body_embeds_fields_verbatim_with_timestamp() {
    let received_at = Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap();
    let body = render_html_body(&submission(), received_at);

    assert!(body.contains(r#"<span style="color: #666;">Ada</span>"#));
    assert!(body.contains(r#"<span style="color: #666;">ada@example.com</span>"#));
    assert!(body.contains("Hello <b>there</b>"));
    assert!(body.contains("Received at: 10/18/2026, 3:04:05 PM UTC"));
  }
}
