use awsprofile::credentials::{CloudCliEntry, CredentialDocument, save_credential_entry};
use awsprofile::error::AppError;

const INI_KEYS: [&str; 3] = [
    "aws_access_key_id",
    "aws_secret_access_key",
    "aws_session_token",
];
const INI_VALUES: [&str; 3] = ["notanid", "notakey", "notatoken"];

fn test_entry() -> CloudCliEntry {
    CloudCliEntry {
        profile_name: "test-profile".to_string(),
        key_id: "notanid".to_string(),
        key: "notakey".to_string(),
        token: "notatoken".to_string(),
    }
}

fn assert_test_profile(document: &CredentialDocument) {
    let section = document
        .section("test-profile")
        .expect("section should have been added");

    for (key, value) in INI_KEYS.iter().zip(INI_VALUES) {
        assert!(section.has_key(key), "section should have {key} field");
        assert_eq!(section.get(key), Some(value), "field {key}");
    }
}

#[test]
fn adds_entry_and_survives_round_trip() {
    let mut document =
        CredentialDocument::read_from(&mut &b""[..]).expect("empty input should load");

    save_credential_entry(&mut document, &test_entry()).expect("save should work");
    assert_test_profile(&document);

    let mut buf = Vec::new();
    document.write_to(&mut buf).expect("write should work");

    let reloaded = CredentialDocument::read_from(&mut buf.as_slice()).expect("reload should work");
    assert_test_profile(&reloaded);
    assert_eq!(reloaded.entry("test-profile"), Some(test_entry()));
}

#[test]
fn keeps_unrelated_sections_in_place() {
    let raw = "\
[default]
aws_access_key_id = AKIADEFAULT
aws_secret_access_key = default/secret+key==
region = us-east-1

[prod]
aws_access_key_id = AKIAPROD
";
    let mut document = CredentialDocument::parse(raw).expect("parse should work");
    save_credential_entry(&mut document, &test_entry()).expect("save should work");

    assert_eq!(
        document.profile_names(),
        ["default", "prod", "test-profile"]
    );

    let reloaded = CredentialDocument::parse(&document.to_ini_string().expect("serialize"))
        .expect("reparse should work");
    assert_eq!(
        reloaded.profile_names(),
        ["default", "prod", "test-profile"]
    );

    let default = reloaded.section("default").expect("default section kept");
    assert_eq!(default.get("aws_access_key_id"), Some("AKIADEFAULT"));
    assert_eq!(
        default.get("aws_secret_access_key"),
        Some("default/secret+key==")
    );
    assert_eq!(default.get("region"), Some("us-east-1"));
    assert!(!default.has_key("aws_session_token"));

    let prod = reloaded.section("prod").expect("prod section kept");
    assert_eq!(prod.keys(), ["aws_access_key_id"]);
    assert_eq!(prod.get("aws_access_key_id"), Some("AKIAPROD"));

    assert_test_profile(&reloaded);
}

#[test]
fn saving_twice_matches_saving_once() {
    let mut once = CredentialDocument::new();
    save_credential_entry(&mut once, &test_entry()).expect("save should work");

    let mut twice = CredentialDocument::new();
    save_credential_entry(&mut twice, &test_entry()).expect("save should work");
    save_credential_entry(&mut twice, &test_entry()).expect("save should work");

    assert_eq!(
        once.to_ini_string().expect("serialize"),
        twice.to_ini_string().expect("serialize")
    );
    assert_eq!(twice.profile_names(), ["test-profile"]);
}

#[test]
fn overwrites_existing_profile_values() {
    let mut document = CredentialDocument::parse(
        "[test-profile]\naws_access_key_id = old-id\naws_session_token = old-token\n",
    )
    .expect("parse should work");

    save_credential_entry(&mut document, &test_entry()).expect("save should work");

    assert_test_profile(&document);
    assert_eq!(document.profile_names(), ["test-profile"]);
}

#[test]
fn rejects_malformed_input() {
    let result = CredentialDocument::parse("[unterminated\nkey = value\n");
    assert!(result.is_err());
}

#[test]
fn quoted_values_round_trip_verbatim() {
    let mut document = CredentialDocument::new();
    let entry = CloudCliEntry {
        profile_name: "p".to_string(),
        key_id: "\"quoted\"".to_string(),
        key: "'q'".to_string(),
        token: r"back\slash\n".to_string(),
    };
    save_credential_entry(&mut document, &entry).expect("save should work");

    let reloaded = CredentialDocument::parse(&document.to_ini_string().expect("serialize"))
        .expect("reparse should work");
    assert_eq!(reloaded.entry("p"), Some(entry));
}

#[test]
fn padded_values_are_rejected() {
    let mut document = CredentialDocument::new();
    let entry = CloudCliEntry {
        profile_name: "p".to_string(),
        key_id: " padded ".to_string(),
        key: " padded ".to_string(),
        token: " padded ".to_string(),
    };

    let result = save_credential_entry(&mut document, &entry);
    assert!(matches!(result, Err(AppError::Document(_))));
    assert!(!document.has_profile("p"));
}

#[test]
fn untouched_sections_serialize_unchanged() {
    let raw = "\
# my creds
[dev]
x=1

[other]
; managed elsewhere
path=C:\\dir\\qq
quoted=\"keep\"
# end
";
    let mut document = CredentialDocument::parse(raw).expect("parse should work");
    let entry = CloudCliEntry {
        profile_name: "dev".to_string(),
        ..test_entry()
    };
    save_credential_entry(&mut document, &entry).expect("save should work");

    let serialized = document.to_ini_string().expect("serialize");
    assert_eq!(
        serialized,
        "\
# my creds
[dev]
x=1
aws_access_key_id=notanid
aws_secret_access_key=notakey
aws_session_token=notatoken

[other]
; managed elsewhere
path=C:\\dir\\qq
quoted=\"keep\"
# end
"
    );
}
