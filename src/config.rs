pub const BRAND: &str = "ICODE";

// E.164 number the WhatsApp deep link points at. Change it here.
pub const WHATSAPP_E164: &str = "+201507619503";

pub const CONTACT_EMAIL: &str = "contact@icode.eu.org";

// localStorage slot for the theme preference.
pub const THEME_STORAGE_KEY: &str = "icode_theme";
