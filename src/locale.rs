//! Built-in pattern tables for the supported mail clients and locales
//!
//! Order matters: within a table earlier entries take priority whenever
//! two patterns match at the same offset.

use crate::pattern::{Capture, PatternDef};

const NAME_ADDRESS: Capture = Capture::NameAddress {
    name: 1,
    address: 2,
};

const ADDRESS: Capture = Capture::Address { group: 1 };

const fn v(pattern: &'static str) -> PatternDef {
    PatternDef::value(pattern)
}

const fn d(pattern: &'static str) -> PatternDef {
    PatternDef::delimiter(pattern)
}

const fn combined(pattern: &'static str) -> PatternDef {
    PatternDef::new(pattern, Capture::Combined)
}

/// Characters separating entries of a mailbox list
pub const MAILBOX_SEPARATORS: &[char] = &[',', ';'];

/// Forwarded subject prefixes
pub static SUBJECT: &[PatternDef] = &[
    v(r"(?m)^Fw:(.*)"),
    v(r"(?m)^VS:(.*)"),
    v(r"(?m)^WG:(.*)"),
    v(r"(?m)^RV:(.*)"),
    v(r"(?m)^TR:(.*)"),
    v(r"(?m)^I:(.*)"),
    v(r"(?m)^FW:(.*)"),
    v(r"(?m)^Vs:(.*)"),
    v(r"(?m)^PD:(.*)"),
    v(r"(?m)^ENC:(.*)"),
    v(r"(?m)^Redir.:(.*)"),
    v(r"(?m)^VB:(.*)"),
    v(r"(?m)^VL:(.*)"),
    v(r"(?m)^Videresend:(.*)"),
    v(r"(?m)^İLT:(.*)"),
    v(r"(?m)^Fwd:(.*)"),
];

/// Banners and quote headers separating the forwarder's text from the forward
pub static SEPARATOR: &[PatternDef] = &[
    // Apple Mail
    d(r"(?m)^>?\s*Begin forwarded message\s?:"),
    d(r"(?m)^>?\s*Začátek přeposílané zprávy\s?:"),
    d(r"(?m)^>?\s*Start på videresendt besked\s?:"),
    d(r"(?m)^>?\s*Anfang der weitergeleiteten Nachricht\s?:"),
    d(r"(?m)^>?\s*Inicio del mensaje reenviado\s?:"),
    d(r"(?m)^>?\s*Välitetty viesti alkaa\s?:"),
    d(r"(?m)^>?\s*Début du message réexpédié\s?:"),
    d(r"(?m)^>?\s*Début du message transféré\s?:"),
    d(r"(?m)^>?\s*Započni proslijeđenu poruku\s?:"),
    d(r"(?m)^>?\s*Továbbított levél kezdete\s?:"),
    d(r"(?m)^>?\s*Inizio messaggio inoltrato\s?:"),
    d(r"(?m)^>?\s*Begin doorgestuurd bericht\s?:"),
    d(r"(?m)^>?\s*Videresendt melding\s?:"),
    d(r"(?m)^>?\s*Początek przekazywanej wiadomości\s?:"),
    d(r"(?m)^>?\s*Início da mensagem reencaminhada\s?:"),
    d(r"(?m)^>?\s*Início da mensagem encaminhada\s?:"),
    d(r"(?m)^>?\s*Începe mesajul redirecționat\s?:"),
    d(r"(?m)^>?\s*Начало переадресованного сообщения\s?:"),
    d(r"(?m)^>?\s*Začiatok preposlanej správy\s?:"),
    d(r"(?m)^>?\s*Vidarebefordrat mejl\s?:"),
    d(r"(?m)^>?\s*İleti başlangıcı\s?:"),
    d(r"(?m)^>?\s*Початок листа, що пересилається\s?:"),
    // Gmail, Missive, HubSpot
    d(r"(?m)^\s*-{8,10}\s*Forwarded message\s*-{8,10}\s*"),
    // Outlook Live / 365
    d(r"(?m)^\s*_{32}\s*$"),
    // Outlook 2019
    d(r"(?m)^\s?Dne\s?.+,\s?.+\s*[\[|<].+[\]|>]\s?napsal\(a\)\s?:"),
    d(r#"(?m)^\s?D.\s?.+\s?skrev\s?".+"\s*[\[|<].+[\]|>]\s?:"#),
    d(r#"(?m)^\s?Am\s?.+\s?schrieb\s?".+"\s*[\[|<].+[\]|>]\s?:"#),
    d(r#"(?m)^\s?On\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?wrote\s?:"#),
    d(r#"(?m)^\s?El\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?escribió\s?:"#),
    d(r"(?m)^\s?Le\s?.+,\s?«.+»\s*[\[|<].+[\]|>]\s?a écrit\s?:"),
    d(r"(?m)^\s?.+\s*[\[|<].+[\]|>]\s?kirjoitti\s?.+\s?:"),
    d(r"(?m)^\s?.+\s?időpontban\s?.+\s*[\[|<|(].+[\]|>|)]\s?ezt írta\s?:"),
    d(r#"(?m)^\s?Il giorno\s?.+\s?".+"\s*[\[|<].+[\]|>]\s?ha scritto\s?:"#),
    d(r"(?m)^\s?Op\s?.+\s?heeft\s?.+\s*[\[|<].+[\]|>]\s?geschreven\s?:"),
    d(r"(?m)^\s?.+\s*[\[|<].+[\]|>]\s?skrev følgende den\s?.+\s?:"),
    d(r"(?m)^\s?Dnia\s?.+\s?„.+”\s*[\[|<].+[\]|>]\s?napisał\s?:"),
    d(r#"(?m)^\s?Em\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?escreveu\s?:"#),
    d(r#"(?m)^\s?.+\s?пользователь\s?".+"\s*[\[|<].+[\]|>]\s?написал\s?:"#),
    d(r"(?m)^\s?.+\s?používateľ\s?.+\s*\([\[|<].+[\]|>]\)\s?napísal\s?:"),
    d(r#"(?m)^\s?Den\s?.+\s?skrev\s?".+"\s*[\[|<].+[\]|>]\s?följande\s?:"#),
    d(r#"(?m)^\s?".+"\s*[\[|<].+[\]|>],\s?.+\s?tarihinde şunu yazdı\s?:"#),
    // Yahoo Mail, Thunderbird, HubSpot
    d(r"(?m)^\s*-{5,8} Přeposlaná zpráva -{5,8}\s*"),
    d(r"(?m)^\s*-{5,8} Videresendt meddelelse -{5,8}\s*"),
    d(r"(?m)^\s*-{5,10} Weitergeleitete Nachricht -{5,10}\s*"),
    d(r"(?m)^\s*-{5,8} Forwarded Message -{5,8}\s*"),
    d(r"(?m)^\s*-{5,10} Mensaje reenviado -{5,10}\s*"),
    d(r"(?m)^\s*-{5,10} Edelleenlähetetty viesti -{5,10}\s*"),
    d(r"(?m)^\s*-{5} Message transmis -{5}\s*"),
    d(r"(?m)^\s*-{5,8} Továbbított üzenet -{5,8}\s*"),
    d(r"(?m)^\s*-{5,10} Messaggio inoltrato -{5,10}\s*"),
    d(r"(?m)^\s*-{5,10} Doorgestuurd bericht -{5,10}\s*"),
    d(r"(?m)^\s*-{5,8} Videresendt melding -{5,8}\s*"),
    d(r"(?m)^\s*-{5} Przekazana wiadomość -{5}\s*"),
    d(r"(?m)^\s*-{5,8} Mensagem reencaminhada -{5,8}\s*"),
    d(r"(?m)^\s*-{5,10} Mensagem encaminhada -{5,10}\s*"),
    d(r"(?m)^\s*-{5,8} Mesaj redirecționat -{5,8}\s*"),
    d(r"(?m)^\s*-{5} Пересылаемое сообщение -{5}\s*"),
    d(r"(?m)^\s*-{5} Preposlaná správa -{5}\s*"),
    d(r"(?m)^\s*-{5,10} Vidarebefordrat meddelande -{5,10}\s*"),
    d(r"(?m)^\s*-{5} İletilmiş Mesaj -{5}\s*"),
    d(r"(?m)^\s*-{5} Перенаправлене повідомлення -{5}\s*"),
    d(r"(?m)^\s*-{8} Välitetty viesti / Fwd.Msg -{8}\s*"),
    d(r"(?m)^\s*-{8,10} Message transféré -{8,10}\s*"),
    d(r"(?m)^\s*-{8} Proslijeđena poruka -{8}\s*"),
    d(r"(?m)^\s*-{8} Messaggio Inoltrato -{8}\s*"),
    d(r"(?m)^\s*-{3} Treść przekazanej wiadomości -{3}\s*"),
    d(r"(?m)^\s*-{8} Перенаправленное сообщение -{8}\s*"),
    d(r"(?m)^\s*-{8} Preposlaná správa --- Forwarded Message -{8}\s*"),
    d(r"(?m)^\s*-{8} İletilen İleti -{8}\s*"),
    d(r"(?m)^\s*-{8} Переслане повідомлення -{8}\s*"),
    d(r"(?m)^\s*-{9,10} メッセージを転送 -{9,10}\s*"),
    d(r"(?m)^\s*-{9,10} Wiadomość przesłana dalej -{9,10}\s*"),
    // IONOS
    d(r"(?m)^>?\s*-{10} Original Message -{10}\s*"),
];

/// Outlook 2019 quote headers carrying the original date and sender
pub static SEPARATOR_WITH_INFORMATION: &[PatternDef] = &[
    combined(
        r"(?m)^\s?Dne\s?(?P<date>.+),\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?napsal\(a\)\s?:",
    ),
    combined(
        r#"(?m)^\s?D.\s?(?P<date>.+)\s?skrev\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?:"#,
    ),
    combined(
        r#"(?m)^\s?Am\s?(?P<date>.+)\s?schrieb\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?:"#,
    ),
    combined(
        r#"(?m)^\s?On\s?(?P<date>.+),\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?wrote\s?:"#,
    ),
    combined(
        r#"(?m)^\s?El\s?(?P<date>.+),\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?escribió\s?:"#,
    ),
    combined(
        r"(?m)^\s?Le\s?(?P<date>.+),\s?«(?P<from_name>.+)»\s*[\[|<](?P<from_address>.+)[\]|>]\s?a écrit\s?:",
    ),
    combined(
        r"(?m)^\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?kirjoitti\s?(?P<date>.+)\s?:",
    ),
    combined(
        r"(?m)^\s?(?P<date>.+)\s?időpontban\s?(?P<from_name>.+)\s*[\[|<|(](?P<from_address>.+)[\]|>|)]\s?ezt írta\s?:",
    ),
    combined(
        r#"(?m)^\s?Il giorno\s?(?P<date>.+)\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?ha scritto\s?:"#,
    ),
    combined(
        r"(?m)^\s?Op\s?(?P<date>.+)\s?heeft\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?geschreven\s?:",
    ),
    combined(
        r"(?m)^\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?skrev følgende den\s?(?P<date>.+)\s?:",
    ),
    combined(
        r"(?m)^\s?Dnia\s?(?P<date>.+)\s?„(?P<from_name>.+)”\s*[\[|<](?P<from_address>.+)[\]|>]\s?napisał\s?:",
    ),
    combined(
        r#"(?m)^\s?Em\s?(?P<date>.+),\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?escreveu\s?:"#,
    ),
    combined(
        r#"(?m)^\s?(?P<date>.+)\s?пользователь\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?написал\s?:"#,
    ),
    combined(
        r"(?m)^\s?(?P<date>.+)\s?používateľ\s?(?P<from_name>.+)\s*\([\[|<](?P<from_address>.+)[\]|>]\)\s?napísal\s?:",
    ),
    combined(
        r#"(?m)^\s?Den\s?(?P<date>.+)\s?skrev\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?följande\s?:"#,
    ),
    combined(
        r#"(?m)^\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>],\s?(?P<date>.+)\s?tarihinde şunu yazdı\s?:"#,
    ),
];

pub static ORIGINAL_SUBJECT: &[PatternDef] = &[
    v(r"(?im)^\*?Subject\s?:\*?(.+)"),
    v(r"(?im)^Předmět\s?:(.+)"),
    v(r"(?im)^Emne\s?:(.+)"),
    v(r"(?im)^Betreff\s?:(.+)"),
    v(r"(?im)^Asunto\s?:(.+)"),
    v(r"(?im)^Aihe\s?:(.+)"),
    v(r"(?im)^Objet\s?:(.+)"),
    v(r"(?im)^Predmet\s?:(.+)"),
    v(r"(?im)^Tárgy\s?:(.+)"),
    v(r"(?im)^Oggetto\s?:(.+)"),
    v(r"(?im)^Onderwerp\s?:(.+)"),
    v(r"(?im)^Temat\s?:(.+)"),
    v(r"(?im)^Assunto\s?:(.+)"),
    v(r"(?im)^Subiectul\s?:(.+)"),
    v(r"(?im)^Тема\s?:(.+)"),
    v(r"(?im)^Ämne\s?:(.+)"),
    v(r"(?im)^Konu\s?:(.+)"),
    v(r"(?im)^Sujet\s?:(.+)"),
    v(r"(?im)^Naslov\s?:(.+)"),
    v(r"(?im)^件名：(.+)"),
];

/// Yahoo Mail writes header fields without line anchors
pub static ORIGINAL_SUBJECT_LAX: &[PatternDef] = &[
    v(r"(?i)Subject\s?:(.+)"),
    v(r"(?i)Emne\s?:(.+)"),
    v(r"(?i)Předmět\s?:(.+)"),
    v(r"(?i)Betreff\s?:(.+)"),
    v(r"(?i)Asunto\s?:(.+)"),
    v(r"(?i)Aihe\s?:(.+)"),
    v(r"(?i)Objet\s?:(.+)"),
    v(r"(?i)Tárgy\s?:(.+)"),
    v(r"(?i)Oggetto\s?:(.+)"),
    v(r"(?i)Onderwerp\s?:(.+)"),
    v(r"(?i)Assunto\s?:?(.+)"),
    v(r"(?i)Temat\s?:(.+)"),
    v(r"(?i)Subiect\s?:(.+)"),
    v(r"(?i)Тема\s?:(.+)"),
    v(r"(?i)Predmet\s?:(.+)"),
    v(r"(?i)Ämne\s?:(.+)"),
    v(r"(?i)Konu\s?:(.+)"),
];

pub static ORIGINAL_FROM: &[PatternDef] = &[
    v(r"(?m)^\*?\s*From\s?:\*?(.+)$"),
    v(r"(?m)^\s*Od\s?:(.+)$"),
    v(r"(?m)^\s*Fra\s?:(.+)$"),
    v(r"(?m)^\s*Von\s?:(.+)$"),
    v(r"(?m)^\s*De\s?:(.+)$"),
    v(r"(?m)^\s*Lähettäjä\s?:(.+)$"),
    v(r"(?m)^\s*Šalje\s?:(.+)$"),
    v(r"(?m)^\s*Feladó\s?:(.+)$"),
    v(r"(?m)^\s*Da\s?:(.+)$"),
    v(r"(?m)^\s*Van\s?:(.+)$"),
    v(r"(?m)^\s*Expeditorul\s?:(.+)$"),
    v(r"(?m)^\s*Отправитель\s?:(.+)$"),
    v(r"(?m)^\s*Från\s?:(.+)$"),
    v(r"(?m)^\s*Kimden\s?:(.+)$"),
    v(r"(?m)^\s*Від кого\s?:(.+)$"),
    v(r"(?m)^\s*Saatja\s?:(.+)$"),
    v(r"(?m)^\s*De la\s?:(.+)$"),
    v(r"(?m)^\s*Gönderen\s?:(.+)$"),
    v(r"(?m)^\s*От\s?:(.+)$"),
    v(r"(?m)^\s*Від\s?:(.+)$"),
    v(r"(?m)^\s*Mittente\s?:(.+)$"),
    v(r"(?m)^\s*Nadawca\s?:(.+)$"),
    v(r"(?m)^\s*de la\s?:(.+)$"),
    v(r"(?m)^\s*送信元：(.+)$"),
];

pub static ORIGINAL_FROM_LAX: &[PatternDef] = &[
    PatternDef::new(r"\s*From\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Od\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Fra\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Von\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*De\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Lähettäjä\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Feladó\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Da\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Van\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*De la\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*От\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Från\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Kimden\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    PatternDef::new(r"\s*Від\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
];

pub static ORIGINAL_TO: &[PatternDef] = &[
    v(r"(?m)^\*?\s*To\s?:\*?(.+)$"),
    v(r"(?m)^\s*Komu\s?:(.+)$"),
    v(r"(?m)^\s*Til\s?:(.+)$"),
    v(r"(?m)^\s*An\s?:(.+)$"),
    v(r"(?m)^\s*Para\s?:(.+)$"),
    v(r"(?m)^\s*Vastaanottaja\s?:(.+)$"),
    v(r"(?m)^\s*À\s?:(.+)$"),
    v(r"(?m)^\s*Prima\s?:(.+)$"),
    v(r"(?m)^\s*Címzett\s?:(.+)$"),
    v(r"(?m)^\s*A\s?:(.+)$"),
    v(r"(?m)^\s*Aan\s?:(.+)$"),
    v(r"(?m)^\s*Do\s?:(.+)$"),
    v(r"(?m)^\s*Destinatarul\s?:(.+)$"),
    v(r"(?m)^\s*Кому\s?:(.+)$"),
    v(r"(?m)^\s*Pre\s?:(.+)$"),
    v(r"(?m)^\s*Till\s?:(.+)$"),
    v(r"(?m)^\s*Kime\s?:(.+)$"),
    v(r"(?m)^\s*Pour\s?:(.+)$"),
    v(r"(?m)^\s*Adresat\s?:(.+)$"),
    v(r"(?m)^\s*送信先：(.+)$"),
];

pub static ORIGINAL_TO_LAX: &[PatternDef] = &[
    v(r"(?m)\s*To\s?:(.+)$"),
    v(r"(?m)\s*Komu\s?:(.+)$"),
    v(r"(?m)\s*Til\s?:(.+)$"),
    v(r"(?m)\s*An\s?:(.+)$"),
    v(r"(?m)\s*Para\s?:(.+)$"),
    v(r"(?m)\s*Vastaanottaja\s?:(.+)$"),
    v(r"(?m)\s*À\s?:(.+)$"),
    v(r"(?m)\s*Címzett\s?:(.+)$"),
    v(r"(?m)\s*A\s?:(.+)$"),
    v(r"(?m)\s*Aan\s?:(.+)$"),
    v(r"(?m)\s*Do\s?:(.+)$"),
    v(r"(?m)\s*Către\s?:(.+)$"),
    v(r"(?m)\s*Кому\s?:(.+)$"),
    v(r"(?m)\s*Till\s?:(.+)$"),
    v(r"(?m)\s*Kime\s?:(.+)$"),
];

pub static ORIGINAL_REPLY_TO: &[PatternDef] = &[
    v(r"(?m)^\s*Reply-To\s?:(.+)$"),
    v(r"(?m)^\s*Odgovori na\s?:(.+)$"),
    v(r"(?m)^\s*Odpověď na\s?:(.+)$"),
    v(r"(?m)^\s*Svar til\s?:(.+)$"),
    v(r"(?m)^\s*Antwoord aan\s?:(.+)$"),
    v(r"(?m)^\s*Vastaus\s?:(.+)$"),
    v(r"(?m)^\s*Répondre à\s?:(.+)$"),
    v(r"(?m)^\s*Antwort an\s?:(.+)$"),
    v(r"(?m)^\s*Válaszcím\s?:(.+)$"),
    v(r"(?m)^\s*Rispondi a\s?:(.+)$"),
    v(r"(?m)^\s*Odpowiedź-do\s?:(.+)$"),
    v(r"(?m)^\s*Responder A\s?:(.+)$"),
    v(r"(?m)^\s*Responder a\s?:(.+)$"),
    v(r"(?m)^\s*Răspuns către\s?:(.+)$"),
    v(r"(?m)^\s*Ответ-Кому\s?:(.+)$"),
    v(r"(?m)^\s*Odpovedať-Pre\s?:(.+)$"),
    v(r"(?m)^\s*Svara till\s?:(.+)$"),
    v(r"(?m)^\s*Yanıt Adresi\s?:(.+)$"),
    v(r"(?m)^\s*Кому відповісти\s?:(.+)$"),
];

pub static ORIGINAL_CC: &[PatternDef] = &[
    v(r"(?m)^\*?\s*Cc\s?:\*?(.+)$"),
    v(r"(?m)^\s*CC\s?:(.+)$"),
    v(r"(?m)^\s*Kopie\s?:(.+)$"),
    v(r"(?m)^\s*Kopio\s?:(.+)$"),
    v(r"(?m)^\s*Másolat\s?:(.+)$"),
    v(r"(?m)^\s*Kopi\s?:(.+)$"),
    v(r"(?m)^\s*Dw\s?:(.+)$"),
    v(r"(?m)^\s*Копия\s?:(.+)$"),
    v(r"(?m)^\s*Kopia\s?:(.+)$"),
    v(r"(?m)^\s*Bilgi\s?:(.+)$"),
    v(r"(?m)^\s*Копія\s?:(.+)$"),
    v(r"(?m)^\s*Másolatot kap\s?:(.+)$"),
    v(r"(?m)^\s*Kópia\s?:(.+)$"),
    v(r"(?m)^\s*DW\s?:(.+)$"),
    v(r"(?m)^\s*Kopie \(CC\)\s?:(.+)$"),
    v(r"(?m)^\s*Copie à\s?:(.+)$"),
    v(r"(?m)^\s*CC：(.+)$"),
];

pub static ORIGINAL_CC_LAX: &[PatternDef] = &[
    v(r"(?m)\s*Cc\s?:(.+)$"),
    v(r"(?m)\s*CC\s?:(.+)$"),
    v(r"(?m)\s*Kopie\s?:(.+)$"),
    v(r"(?m)\s*Kopio\s?:(.+)$"),
    v(r"(?m)\s*Másolat\s?:(.+)$"),
    v(r"(?m)\s*Kopi\s?:(.+)$"),
    v(r"(?m)\s*Dw\s?(.+)$"),
    v(r"(?m)\s*Копия\s?:(.+)$"),
    v(r"(?m)\s*Kópia\s?:(.+)$"),
    v(r"(?m)\s*Kopia\s?:(.+)$"),
    v(r"(?m)\s*Копія\s?:(.+)$"),
];

pub static ORIGINAL_DATE: &[PatternDef] = &[
    v(r"(?m)^\s*Date\s?:(.+)$"),
    v(r"(?m)^\s*Datum\s?:(.+)$"),
    v(r"(?m)^\s*Dato\s?:(.+)$"),
    v(r"(?m)^\s*Envoyé\s?:(.+)$"),
    v(r"(?m)^\s*Fecha\s?:(.+)$"),
    v(r"(?m)^\s*Päivämäärä\s?:(.+)$"),
    v(r"(?m)^\s*Dátum\s?:(.+)$"),
    v(r"(?m)^\s*Data\s?:(.+)$"),
    v(r"(?m)^\s*Dată\s?:(.+)$"),
    v(r"(?m)^\s*Дата\s?:(.+)$"),
    v(r"(?m)^\s*Tarih\s?:(.+)$"),
    v(r"(?m)^\*?\s*Sent\s?:\*?(.+)$"),
    v(r"(?m)^\s*Päiväys\s?:(.+)$"),
    v(r"(?m)^\s*日付：(.+)$"),
];

pub static ORIGINAL_DATE_LAX: &[PatternDef] = &[
    v(r"(?m)\s*Datum\s?:(.+)$"),
    v(r"(?m)\s*Sendt\s?:(.+)$"),
    v(r"(?m)\s*Gesendet\s?:(.+)$"),
    v(r"(?m)\s*Sent\s?:(.+)$"),
    v(r"(?m)\s*Enviado\s?:(.+)$"),
    v(r"(?m)\s*Envoyé\s?:(.+)$"),
    v(r"(?m)\s*Lähetetty\s?:(.+)$"),
    v(r"(?m)\s*Elküldve\s?:(.+)$"),
    v(r"(?m)\s*Inviato\s?:(.+)$"),
    v(r"(?m)\s*Verzonden\s?:(.+)$"),
    v(r"(?m)\s*Wysłano\s?:(.+)$"),
    v(r"(?m)\s*Trimis\s?:(.+)$"),
    v(r"(?m)\s*Отправлено\s?:(.+)$"),
    v(r"(?m)\s*Odoslané\s?:(.+)$"),
    v(r"(?m)\s*Skickat\s?:(.+)$"),
    v(r"(?m)\s*Gönderilen\s?:(.+)$"),
    v(r"(?m)\s*Відправлено\s?:(.+)$"),
];

/// Shapes of a single mailbox at the start of a mailbox list
pub static MAILBOX: &[PatternDef] = &[
    // <a@b.c<mailto:a@b.c>>
    PatternDef::new(r"^\s?\n?\s*<.+?<mailto:(.+?)>>", ADDRESS),
    // Name <a@b.c<mailto:a@b.c>>
    PatternDef::new(r"^(.+?)\s?\n?\s*<.+?<mailto:(.+?)>>", NAME_ADDRESS),
    // Name <mailto:a@b.c> or Name [mailto:a@b.c]
    PatternDef::new(r"^(.+?)\s?\n?\s*[\[|<]mailto:(.+?)[\]|>]", NAME_ADDRESS),
    // 'Name' <a@b.c>
    PatternDef::new(r"^'(.+?)'\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    // "'Name'" <a@b.c>
    PatternDef::new(r#"^"'(.+?)'"\s?\n?\s*[\[|<](.+?)[\]|>]"#, NAME_ADDRESS),
    // "Name" <a@b.c>
    PatternDef::new(r#"^"(.+?)"\s?\n?\s*[\[|<](.+?)[\]|>]"#, NAME_ADDRESS),
    // Name <a@b.c>
    PatternDef::new(r"^([^,;]+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    // <a@b.c>
    PatternDef::new(r"^(.?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
    // a@b.c
    PatternDef::new(r"^([^\s@]+@[^\s@]+\.[^\s@,]+)", ADDRESS),
    // Last, First <a@b.c>
    PatternDef::new(r"^([^;].+?)\s?\n?\s*[\[|<](.+?)[\]|>]", NAME_ADDRESS),
];

/// A bare `local@domain.tld` token
pub static MAILBOX_ADDRESS: &[PatternDef] = &[d(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")];
