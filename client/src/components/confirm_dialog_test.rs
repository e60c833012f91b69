use super::*;

#[test]
fn stage_prompt_asks_for_title_first() {
    let mut c = Confirmation::default();
    c.request(ConfirmAction::DeleteGame { id: 1, title: "Ketsui".to_owned() });
    assert!(is_type_name(&c));
    assert_eq!(stage_prompt(&c).unwrap(), Stage::type_name_prompt("Ketsui"));
    c.enter("Ketsui");
    c.advance();
    assert!(!is_type_name(&c));
    assert!(stage_prompt(&c).unwrap().contains("Really delete"));
}

#[test]
fn stage_prompt_is_none_when_idle() {
    assert_eq!(stage_prompt(&Confirmation::Idle), None);
}
