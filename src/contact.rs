use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::Callback;

use crate::config;

/// Builds a `wa.me` deep link from a raw phone number and a free-text
/// message. Keeps digits and `+`, drops one leading `+`, percent-encodes
/// the message. Pure, no side effects.
pub fn wa_link(phone_raw: &str, message: &str) -> String {
    let kept: String = phone_raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let digits = kept.strip_prefix('+').unwrap_or(&kept);
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

/// The pre-filled WhatsApp pitch message.
pub fn pitch() -> String {
    format!(
        "Hi {},\n\
         I'd like a page/site for my service.\n\
         \n\
         Goal: (fill in)\n\
         Number of pages: (fill in)\n\
         Content ready? (yes/no)\n\
         Deadline: (fill in)\n\
         Budget: (fill in)\n\
         Links I like: (fill in)\n\
         My number: (fill in)",
        config::BRAND
    )
}

pub fn whatsapp_url() -> String {
    wa_link(config::WHATSAPP_E164, &pitch())
}

/// Puts `text` on the clipboard. On success emits `on_copied` so the caller
/// can show a notice; on failure falls back to a synchronous prompt carrying
/// the same text so the user can copy it manually. Never fatal.
pub fn copy_text(text: String, on_copied: Callback<()>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let clipboard = window.navigator().clipboard();
    spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_copied.emit(()),
            Err(_) => {
                let _ = window.prompt_with_message_and_default("Copy the message manually:", &text);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_from_the_number() {
        let url = wa_link("+20 150 761 9503", "hi");
        assert_eq!(url, "https://wa.me/201507619503?text=hi");
    }

    #[test]
    fn message_survives_the_query_parameter() {
        let message = "hello there — let's talk?&=";
        let url = wa_link("+201507619503", message);
        let encoded = url.split("?text=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }

    #[test]
    fn number_without_plus_passes_through() {
        let url = wa_link("(20) 150-761-9503", "hi");
        assert!(url.starts_with("https://wa.me/201507619503?"));
    }

    #[test]
    fn pitch_addresses_the_brand() {
        let text = pitch();
        assert!(text.starts_with("Hi ICODE,"));
        assert!(text.contains("Budget:"));
    }

    #[test]
    fn configured_number_yields_a_clean_path() {
        let url = whatsapp_url();
        assert!(url.starts_with("https://wa.me/201507619503?text="));
        let encoded = url.split("?text=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), pitch());
    }
}
