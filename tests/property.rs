//! Property tests for the credential hasher and the register validation order

use proptest::prelude::*;

use authgate::backend::auth::{Claims, PasswordHasher, RegisterRequest, TokenService};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_hash_verifies_only_its_password(a in "[ -~]{1,40}", b in "[ -~]{1,40}") {
        let rt = runtime();
        let hasher = PasswordHasher::with_cost(4);
        let (hash, ok, other) = rt.block_on(async {
            let hash = hasher.hash(&a).await.unwrap();
            let ok = hasher.verify(&a, &hash).await.unwrap();
            let other = hasher.verify(&b, &hash).await.unwrap();
            (hash, ok, other)
        });
        prop_assert!(ok);
        prop_assert_ne!(hash, a.clone());
        if a != b {
            prop_assert!(!other);
        }
    }

    #[test]
    fn prop_tampered_token_fails(id in "[a-z0-9]{1,20}", flip in 0usize..200) {
        let tokens = TokenService::new("prop-secret");
        let token = tokens.issue(&Claims::for_user(id)).unwrap();

        let mut bytes = token.into_bytes();
        let idx = flip % bytes.len();
        bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn prop_register_request_accepts_any_strings(u in ".*", p in ".*") {
        let body = serde_json::json!({ "usuario": u, "password": p, "confirmpassword": p });
        let request: RegisterRequest = serde_json::from_value(body).unwrap();
        prop_assert_eq!(request.usuario, Some(u));
        prop_assert_eq!(request.password.clone(), request.confirmpassword);
    }
}
