/*!
 * Common test utilities for the umgloc test suite
 */

use umgloc::app_config::Config;

/// Route library logging to the test output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Configuration used by service tests
pub fn test_config() -> Config {
    Config {
        source_language: Some("EN".to_string()),
        target_language: "DE".to_string(),
        ..Config::default()
    }
}

/// Well-formed marker text covering every construct
pub fn sample_marker_strings() -> Vec<&'static str> {
    vec![
        "",
        "Plain text only",
        "{foo bar=1}Hello {baz}wor%{var}ld{/foo}{/baz}",
        "{color value=red}Warning{/color}: %{count} items left",
        "Use {{braces}} like this",
        "{tag arg=a}}b}escaped closing brace{/tag}",
        "100% done, 50%off, %d",
        "Fish & \"chips\" <3 it's 'quoted'",
        "{a}{b}{c}deep{/c}{/b}{/a}",
        "{a}{b}{/a}{/b}",
        "{x k=1 k=2}duplicate keys{/x}",
        "Ünïcödé {b}текст{/b} 日本語 %{名前}",
        "a}b stray closing brace outside a region",
    ]
}
