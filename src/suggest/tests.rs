use super::*;

#[test]
fn test_static_suggestions_non_empty() {
    let tips = StaticSuggestions.suggestions();
    assert!(!tips.is_empty());
    assert!(tips.iter().all(|t| !t.is_empty()));
}

#[test]
fn test_provider_is_object_safe() {
    let provider: Box<dyn SuggestionProvider> = Box::new(StaticSuggestions);
    assert_eq!(provider.suggestions(), StaticSuggestions.suggestions());
}
