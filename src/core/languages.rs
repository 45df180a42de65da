//! Supported translation languages.
//!
//! Generated by `edge-translator generate-langs`. Do not edit by hand.

use crate::core::lang::Language;

/// Provider language codes and their English display names, in provider order.
pub static LANGUAGES: &[Language] = &[
    Language::new("af", "Afrikaans"),
    Language::new("am", "Amharic"),
    Language::new("ar", "Arabic"),
    Language::new("as", "Assamese"),
    Language::new("az", "Azerbaijani"),
    Language::new("ba", "Bashkir"),
    Language::new("bg", "Bulgarian"),
    Language::new("bho", "Bhojpuri"),
    Language::new("bn", "Bangla"),
    Language::new("bo", "Tibetan"),
    Language::new("brx", "Bodo"),
    Language::new("bs", "Bosnian"),
    Language::new("ca", "Catalan"),
    Language::new("cs", "Czech"),
    Language::new("cy", "Welsh"),
    Language::new("da", "Danish"),
    Language::new("de", "German"),
    Language::new("doi", "Dogri"),
    Language::new("dsb", "Lower Sorbian"),
    Language::new("dv", "Divehi"),
    Language::new("el", "Greek"),
    Language::new("en", "English"),
    Language::new("es", "Spanish"),
    Language::new("et", "Estonian"),
    Language::new("eu", "Basque"),
    Language::new("fa", "Persian"),
    Language::new("fi", "Finnish"),
    Language::new("fil", "Filipino"),
    Language::new("fj", "Fijian"),
    Language::new("fo", "Faroese"),
    Language::new("fr", "French"),
    Language::new("fr-CA", "French (Canada)"),
    Language::new("ga", "Irish"),
    Language::new("gl", "Galician"),
    Language::new("gom", "Konkani"),
    Language::new("gu", "Gujarati"),
    Language::new("ha", "Hausa"),
    Language::new("he", "Hebrew"),
    Language::new("hi", "Hindi"),
    Language::new("hne", "Chhattisgarhi"),
    Language::new("hr", "Croatian"),
    Language::new("hsb", "Upper Sorbian"),
    Language::new("ht", "Haitian Creole"),
    Language::new("hu", "Hungarian"),
    Language::new("hy", "Armenian"),
    Language::new("id", "Indonesian"),
    Language::new("ig", "Igbo"),
    Language::new("ikt", "Inuinnaqtun"),
    Language::new("is", "Icelandic"),
    Language::new("it", "Italian"),
    Language::new("iu", "Inuktitut"),
    Language::new("iu-Latn", "Inuktitut (Latin)"),
    Language::new("ja", "Japanese"),
    Language::new("ka", "Georgian"),
    Language::new("kk", "Kazakh"),
    Language::new("km", "Khmer"),
    Language::new("kmr", "Kurdish (Northern)"),
    Language::new("kn", "Kannada"),
    Language::new("ko", "Korean"),
    Language::new("ks", "Kashmiri"),
    Language::new("ku", "Kurdish (Central)"),
    Language::new("ky", "Kyrgyz"),
    Language::new("ln", "Lingala"),
    Language::new("lo", "Lao"),
    Language::new("lt", "Lithuanian"),
    Language::new("lug", "Ganda"),
    Language::new("lv", "Latvian"),
    Language::new("lzh", "Chinese (Literary)"),
    Language::new("mai", "Maithili"),
    Language::new("mg", "Malagasy"),
    Language::new("mi", "Māori"),
    Language::new("mk", "Macedonian"),
    Language::new("ml", "Malayalam"),
    Language::new("mn-Cyrl", "Mongolian (Cyrillic)"),
    Language::new("mn-Mong", "Mongolian (Traditional)"),
    Language::new("mni", "Manipuri"),
    Language::new("mr", "Marathi"),
    Language::new("ms", "Malay"),
    Language::new("mt", "Maltese"),
    Language::new("mww", "Hmong Daw"),
    Language::new("my", "Myanmar (Burmese)"),
    Language::new("nb", "Norwegian"),
    Language::new("ne", "Nepali"),
    Language::new("nl", "Dutch"),
    Language::new("nso", "Sesotho sa Leboa"),
    Language::new("nya", "Nyanja"),
    Language::new("or", "Odia"),
    Language::new("otq", "Querétaro Otomi"),
    Language::new("pa", "Punjabi"),
    Language::new("pl", "Polish"),
    Language::new("prs", "Dari"),
    Language::new("ps", "Pashto"),
    Language::new("pt", "Portuguese (Brazil)"),
    Language::new("pt-PT", "Portuguese (Portugal)"),
    Language::new("ro", "Romanian"),
    Language::new("ru", "Russian"),
    Language::new("run", "Rundi"),
    Language::new("rw", "Kinyarwanda"),
    Language::new("sd", "Sindhi"),
    Language::new("si", "Sinhala"),
    Language::new("sk", "Slovak"),
    Language::new("sl", "Slovenian"),
    Language::new("sm", "Samoan"),
    Language::new("sn", "Shona"),
    Language::new("so", "Somali"),
    Language::new("sq", "Albanian"),
    Language::new("sr-Cyrl", "Serbian (Cyrillic)"),
    Language::new("sr-Latn", "Serbian (Latin)"),
    Language::new("st", "Sesotho"),
    Language::new("sv", "Swedish"),
    Language::new("sw", "Swahili"),
    Language::new("ta", "Tamil"),
    Language::new("te", "Telugu"),
    Language::new("th", "Thai"),
    Language::new("ti", "Tigrinya"),
    Language::new("tk", "Turkmen"),
    Language::new("tlh-Latn", "Klingon (Latin)"),
    Language::new("tlh-Piqd", "Klingon (pIqaD)"),
    Language::new("tn", "Setswana"),
    Language::new("to", "Tongan"),
    Language::new("tr", "Turkish"),
    Language::new("tt", "Tatar"),
    Language::new("ty", "Tahitian"),
    Language::new("ug", "Uyghur"),
    Language::new("uk", "Ukrainian"),
    Language::new("ur", "Urdu"),
    Language::new("uz", "Uzbek (Latin)"),
    Language::new("vi", "Vietnamese"),
    Language::new("xh", "Xhosa"),
    Language::new("yo", "Yoruba"),
    Language::new("yua", "Yucatec Maya"),
    Language::new("yue", "Cantonese (Traditional)"),
    Language::new("zh-Hans", "Chinese Simplified"),
    Language::new("zh-Hant", "Chinese Traditional"),
    Language::new("zu", "Zulu"),
];
