use std::sync::Arc;
use std::thread;

use ivola::{
    ask, ask_as, permission_for, permission_for_label, CulturalResolver, KnowledgeBase, Outcome,
    RejectReason, Resolution, Role, ACCESS_DENIED_MESSAGE,
};

const BULA: &str = "Bula! In iTaukei culture, \"bula\" means more than hello - it represents life, health, and positive energy. When we say bula, we are wishing vitality and well-being upon others. This greeting connects us to our vanua (land) and our community values.";

const VANUA: &str = "Vanua is a fundamental concept in iTaukei worldview. It encompasses not just the physical land, but the people, traditions, and spiritual connections that bind a community together. The vanua includes all living and ancestral relationships to a place.";

const FALLBACK: &str = "I can help explain iTaukei cultural concepts, language, and traditions. Please ask about specific terms or practices you'd like to understand better. Try asking about: bula, vanua, matanitu, solesolevaki, or tabua.";

#[test]
fn community_roles_have_access_and_researcher_does_not() {
    for role in [Role::Elder, Role::Educator, Role::Youth] {
        assert!(permission_for(role).can_access());
    }
    assert!(!permission_for(Role::Researcher).can_access());
    assert!(!permission_for_label("visitor").can_access());
}

#[test]
fn blank_queries_are_rejected_regardless_of_role() {
    for role in Role::ALL {
        assert_eq!(
            ask(role, ""),
            Resolution::Rejected {
                reason: RejectReason::EmptyQuery
            }
        );
        assert_eq!(ask(role, "   ").outcome(), Outcome::EmptyQueryRejected);
        assert_eq!(ask(role, "\u{FEFF}").outcome(), Outcome::EmptyQueryRejected);
    }
    // Rejection comes before the role check, even for unknown labels.
    assert_eq!(ask_as("nobody", " ").outcome(), Outcome::EmptyQueryRejected);
}

#[test]
fn researcher_asking_bula_is_denied() {
    let resolution = ask(Role::Researcher, "bula");
    assert_eq!(resolution.outcome(), Outcome::PermissionDenied);
    assert_eq!(resolution.message(), ACCESS_DENIED_MESSAGE);
}

#[test]
fn elder_greeting_resolves_to_exact_bula_explanation() {
    let resolution = ask(Role::Elder, "Bula everyone!");
    let Resolution::Resolved(answer) = resolution else {
        panic!("expected resolved answer");
    };
    assert_eq!(answer.explanation, BULA);
    assert_eq!(answer.matched_term.as_deref(), Some("bula"));
}

#[test]
fn vanua_is_declared_before_tabua() {
    let resolution = ask(Role::Elder, "tell me about vanua and tabua");
    assert_eq!(resolution.message(), VANUA);
}

#[test]
fn unknown_term_resolves_to_fallback_not_error() {
    let resolution = ask(Role::Educator, "what is a koro");
    assert_eq!(resolution.outcome(), Outcome::Resolved);
    assert_eq!(resolution.message(), FALLBACK);
    assert!(resolution.answer().unwrap().is_fallback());
}

#[test]
fn repeated_calls_are_identical() {
    for role in Role::ALL {
        for query in ["", "Bula everyone!", "vanua and tabua", "what is a koro"] {
            assert_eq!(ask(role, query), ask(role, query));
        }
    }
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = Arc::new(CulturalResolver::new());
    let handles: Vec<_> = Role::ALL
        .into_iter()
        .map(|role| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || (role, resolver.ask(role, "solesolevaki")))
        })
        .collect();

    for handle in handles {
        let (role, resolution) = handle.join().unwrap();
        assert_eq!(resolution, ask(role, "solesolevaki"));
    }
}

#[test]
fn custom_knowledge_base_keeps_the_same_gate() {
    let kb = KnowledgeBase::builder()
        .entry("lovo", "An earth oven.")
        .fallback("Ask about lovo.")
        .build()
        .unwrap();
    let resolver =
        CulturalResolver::with_parts(Arc::new(ivola::StaticAccessPolicy), Arc::new(kb));

    assert_eq!(resolver.ask(Role::Youth, "LOVO feast").message(), "An earth oven.");
    assert_eq!(resolver.ask(Role::Youth, "bula").message(), "Ask about lovo.");
    assert!(resolver.ask(Role::Researcher, "lovo").is_denied());
    assert!(resolver.ask_as("guest", "lovo").is_denied());
}
