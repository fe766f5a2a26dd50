use proptest::prelude::*;

use ivola::{ask, ask_as, KnowledgeBase, Outcome, Role, ACCESS_DENIED_MESSAGE};

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn whitespace_only_queries_are_always_rejected(
        role in any_role(),
        query in "[ \t\r\n\u{a0}\u{3000}\u{feff}]{0,16}",
    ) {
        prop_assert_eq!(ask(role, &query).outcome(), Outcome::EmptyQueryRejected);
    }

    #[test]
    fn ask_is_idempotent(role in any_role(), query in "\\PC{0,40}") {
        prop_assert_eq!(ask(role, &query), ask(role, &query));
    }

    #[test]
    fn researcher_never_reaches_the_knowledge_base(query in "[a-z ]{0,30}[a-z][a-z ]{0,30}") {
        let resolution = ask(Role::Researcher, &query);
        prop_assert_eq!(resolution.outcome(), Outcome::PermissionDenied);
        prop_assert_eq!(resolution.message(), ACCESS_DENIED_MESSAGE);
    }

    #[test]
    fn unknown_labels_behave_like_researcher(
        label in "[a-z]{1,12}".prop_filter("must not be a role", |l| l.parse::<Role>().is_err()),
        query in "[a-z ]{1,30}",
    ) {
        prop_assert_eq!(ask_as(&label, &query), ask(Role::Researcher, &query));
    }

    #[test]
    fn granted_roles_match_the_knowledge_base(
        role in prop::sample::select(vec![Role::Elder, Role::Educator, Role::Youth]),
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
    ) {
        let kb = KnowledgeBase::shared();
        for term in kb.terms() {
            let query = format!("{prefix}{term}{suffix}");
            let resolution = ask(role, &query);
            prop_assert_eq!(resolution.message(), kb.resolve(&query));
        }
    }
}
