//! Welcome email bodies.

use chrono::Datelike;

pub const PRODUCT_NAME: &str = "MEVO";
pub const PLATFORM_URL: &str = "https://www.mevoagent.com/";
pub const BOOKING_URL: &str = "https://cal.com/problemx";
pub const DISCOUNT_CODE: &str = "WELCOME15";

pub fn welcome_subject() -> String {
    format!("🎉 Welcome to {PRODUCT_NAME} — Let's Get Started ")
}

pub fn welcome_html(user_name: &str) -> String {
    let user_name = escape_html(user_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Welcome to {PRODUCT_NAME}</title>
  <style>
    body {{ font-family: Arial, sans-serif; background-color: #ffffff; color: #000000; margin: 0; padding: 0; line-height: 1.6; }}
    .container {{ max-width: 600px; margin: 40px auto; padding: 30px; background-color: #ffffff; }}
    h1 {{ font-size: 24px; color: #000000; margin-bottom: 20px; }}
    p {{ margin-bottom: 16px; }}
    a {{ color: #3366cc; text-decoration: none; }}
    a:hover {{ text-decoration: underline; }}
    .button {{ display: inline-block; margin-top: 30px; background-color: #3B82F6; color: white !important; padding: 14px 24px; text-align: center; text-decoration: none; font-weight: bold; border-radius: 6px; border: none; }}
    .button:hover {{ background-color: #2563EB; text-decoration: none; }}
    .emoji {{ font-size: 20px; }}
  </style>
</head>
<body>
  <div class="container">
    <h1>Welcome to {PRODUCT_NAME}!</h1>

    <p>Hi {user_name},</p>

    <p><em><strong>Welcome to {PRODUCT_NAME} — we're excited to have you on board!</strong></em></p>

    <p>To celebrate your arrival, here's a <strong>15% discount</strong> for your first month to get more usage:</p>

    <p>🎁 Use code <strong>{DISCOUNT_CODE}</strong> at checkout.</p>

    <p><strong>For your business:</strong> if you want to automate manual and ordinary tasks for your company, book a call with us <a href="{BOOKING_URL}">here</a></p>

    <p>Thanks again, and welcome to the {PRODUCT_NAME} community <span class="emoji">🌞</span></p>

    <p>— The {PRODUCT_NAME} Team</p>

    <a href="{PLATFORM_URL}" class="button">Go to the platform</a>
  </div>
</body>
</html>"#
    )
}

pub fn welcome_text(user_name: &str) -> String {
    let year = chrono::Utc::now().year();
    format!(
        "Hi {user_name},

Welcome to {PRODUCT_NAME} — we're excited to have you on board!

To celebrate your arrival, here's a 15% discount for your first month to get more usage:
🎁 Use code {DISCOUNT_CODE} at checkout.

For your business: if you want to automate manual and ordinary tasks for your company, book a call with us here: {BOOKING_URL}

Thanks again, and welcome to the {PRODUCT_NAME} community 🌞

— The {PRODUCT_NAME} Team

Go to the platform: {PLATFORM_URL}

---
© {year} {PRODUCT_NAME}. All rights reserved.
You received this email because you signed up for a {PRODUCT_NAME} account."
    )
}

/// Display name from an address: the local part, title-cased
/// (`jane.doe@x.io` → `Jane.Doe`).
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut out = String::with_capacity(local.len());
    let mut prev_alpha = false;
    for c in local.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
