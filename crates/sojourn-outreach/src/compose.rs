//! Outreach message composition.
//!
//! A pure template fill: identical input produces byte-identical output.
//! The requesting guide's identity is not an input, so the message cannot
//! leak it; the body only ever speaks of "a retreat leader".

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Inputs for one composed message.
#[derive(Debug, Clone)]
pub struct ComposeParams {
    pub vendor_name: String,
    pub vendor_email: String,
    pub vendor_category: String,
    pub location: String,
    /// Root of the marketplace site, used for the signup and unsubscribe
    /// links.
    pub signup_base_url: String,
}

/// A fully rendered outreach email, ready for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Postal address required in the footer of commercial email.
const SENDER_IDENTITY: &str = "Sojourn, 228 Hamilton Ave, 3rd Floor, Palo Alto, CA 94301";

const VALUE_PROPS: [&str; 3] = [
    "Get discovered by retreat leaders planning events in your area",
    "Receive booking requests with dates, group size, and budget up front",
    "No listing fees — you only pay when a booking is confirmed",
];

/// Renders the outreach email for one vendor.
///
/// The vendor's email is percent-encoded into the signup link so a later
/// signup can be attributed to this outreach.
#[must_use]
pub fn compose(params: &ComposeParams) -> OutreachMessage {
    let base = params.signup_base_url.trim_end_matches('/');
    let encoded_email = utf8_percent_encode(&params.vendor_email, NON_ALPHANUMERIC).to_string();
    let signup_url = format!("{base}/vendors/signup?source=outreach&vendor_email={encoded_email}");
    let unsubscribe_url = format!("{base}/unsubscribe?email={encoded_email}");

    let subject = format!(
        "A retreat leader is looking for {} services near {}",
        params.vendor_category, params.location
    );

    let greeting = format!("Hi {},", params.vendor_name);
    let pitch = format!(
        "A retreat leader on Sojourn is planning an upcoming retreat near {} and is looking \
         for {} services like yours.",
        params.location, params.vendor_category
    );
    let invite = "Sojourn connects retreat organizers with trusted local vendors. \
                  Creating a vendor profile is free and takes a few minutes:";

    let text = {
        let mut body = format!("{greeting}\n\n{pitch}\n\n{invite}\n\n{signup_url}\n\n");
        for prop in VALUE_PROPS {
            body.push_str("  - ");
            body.push_str(prop);
            body.push('\n');
        }
        body.push_str(&format!(
            "\n--\n{SENDER_IDENTITY}\nYou received this one-time message because your business \
             is publicly listed near {}. Unsubscribe: {unsubscribe_url}\n",
            params.location
        ));
        body
    };

    let html = {
        let mut body = format!("<p>{greeting}</p>\n<p>{pitch}</p>\n<p>{invite}</p>\n<ul>\n");
        for prop in VALUE_PROPS {
            body.push_str(&format!("  <li>{prop}</li>\n"));
        }
        body.push_str(&format!(
            "</ul>\n<p><a href=\"{signup_url}\">Create your free vendor profile</a></p>\n\
             <hr>\n<p style=\"font-size:12px;color:#666\">{SENDER_IDENTITY}<br>\nYou received \
             this one-time message because your business is publicly listed near {}. \
             <a href=\"{unsubscribe_url}\">Unsubscribe</a></p>\n",
            params.location
        ));
        body
    };

    OutreachMessage {
        to: params.vendor_email.clone(),
        subject,
        html,
        text,
    }
}
