use knapbench_utils::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Settings {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let settings = Settings {
        zeta: 1,
        alpha: vec![2, 3],
    };
    assert_eq!(jsonify(&settings).unwrap(), r#"{"alpha":[2,3],"zeta":1}"#);
}

#[test]
fn test_dejsonify() {
    let settings: Settings = dejsonify(r#"{"zeta": 4, "alpha": []}"#).unwrap();
    assert_eq!(
        settings,
        Settings {
            zeta: 4,
            alpha: vec![]
        }
    );
    assert!(dejsonify::<Settings>("{").is_err());
}
