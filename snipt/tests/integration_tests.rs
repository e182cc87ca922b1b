use snippets::{Snippet, SnippetLibrary};
use snipt::events::DataEvent;
use snipt::input::{Key, KeyEvent};
use snipt::state::{InputMode, LoadingState, LogsState, SnippetsState};
use snipt::testing::TestApp;
use snipt::ui::screens::Screen;

fn library() -> Vec<Snippet> {
    vec![
        Snippet::new("fib", "Python")
            .with_id(1)
            .with_tags(["math"])
            .with_code(["def fib(n):", "    return n if n < 2 else fib(n - 1) + fib(n - 2)"]),
        Snippet::new("plot", "Python")
            .with_id(2)
            .with_tags(["viz"])
            .with_code(["plt.plot(xs, ys)"]),
        Snippet::new("read_file", "Rust")
            .with_id(3)
            .with_tags(["io"])
            .with_code(["std::fs::read_to_string(path)?"]),
        Snippet::new("hist", "Python")
            .with_id(4)
            .with_tags(["viz", "math"])
            .with_code(["plt.hist(xs)"]),
    ]
}

fn logs_discriminant() -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Logs(LogsState::default()))
}

fn snippets_discriminant() -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Snippets(Box::new(SnippetsState::default())))
}

fn selected_index(app: &TestApp) -> Option<usize> {
    app.snippets().table_state.borrow().selected()
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('/'));

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));

    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_loaded_library_shows_everything() {
    let app = TestApp::with_snippets(library());

    assert_eq!(app.snippets().loading, LoadingState::Loaded);
    assert_eq!(
        app.visible_snippet_names(),
        vec!["fib", "plot", "read_file", "hist"]
    );
    assert_eq!(app.snippets().filter_panel.vocabulary(), ["io", "math", "viz"]);
    assert!(app.snippets().filter_panel.selected_tags().is_empty());
    assert!(!app.snippets().filter_panel.is_expanded());
}

#[test]
fn test_search_filters_as_you_type() {
    let mut app = TestApp::with_snippets(library());

    app.send_key(Key::Char('/'));
    assert_eq!(app.snippets().input_mode, InputMode::Search);

    app.type_text("pl");
    assert_eq!(app.snippets().filter_panel.search_text(), "pl");
    assert_eq!(app.visible_snippet_names(), vec!["plot", "hist"]);

    app.type_text("ot");
    assert_eq!(app.visible_snippet_names(), vec!["plot"]);

    app.send_key(Key::Backspace);
    app.send_key(Key::Backspace);
    assert_eq!(app.visible_snippet_names(), vec!["plot", "hist"]);
}

#[test]
fn test_search_mode_swallows_command_keys() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('/'));

    app.type_text("q?t");

    app.assert_not_quit();
    assert!(!app.state().help_visible);
    assert!(!app.snippets().filter_panel.is_expanded());
    assert_eq!(app.snippets().filter_panel.search_text(), "q?t");
}

#[test]
fn test_enter_keeps_search_and_esc_clears_it() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('/'));
    app.type_text("fib");

    app.send_key(Key::Enter);
    assert_eq!(app.snippets().input_mode, InputMode::Normal);
    assert_eq!(app.visible_snippet_names(), vec!["fib"]);

    app.send_key(Key::Esc);
    assert_eq!(app.snippets().filter_panel.search_text(), "");
    assert_eq!(app.visible_snippet_names().len(), 4);
}

#[test]
fn test_esc_in_search_mode_clears_and_leaves() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('/'));
    app.type_text("plot");

    app.send_key(Key::Esc);

    assert_eq!(app.snippets().input_mode, InputMode::Normal);
    assert_eq!(app.snippets().filter_panel.search_text(), "");
    assert_eq!(app.visible_snippet_names().len(), 4);
}

#[test]
fn test_tag_panel_toggle_does_not_touch_filter() {
    let mut app = TestApp::with_snippets(library());

    app.send_key(Key::Char('t'));
    assert!(app.snippets().filter_panel.is_expanded());

    app.send_key(Key::Char('t'));
    assert!(!app.snippets().filter_panel.is_expanded());
    assert_eq!(app.visible_snippet_names().len(), 4);
}

#[test]
fn test_tab_without_tags_stays_in_list() {
    let mut app = TestApp::with_snippets(vec![Snippet::new("untagged", "Rust")]);

    app.send_key(Key::Tab);

    assert_eq!(app.snippets().input_mode, InputMode::Normal);
    assert!(!app.snippets().filter_panel.is_expanded());
}

#[test]
fn test_selecting_tags_with_chip_cursor() {
    let mut app = TestApp::with_snippets(library());

    // Tab opens the panel with the cursor on the first chip
    app.send_key(Key::Tab);
    assert_eq!(app.snippets().input_mode, InputMode::Tags);
    assert!(app.snippets().filter_panel.is_expanded());
    assert_eq!(app.snippets().filter_panel.focused_tag(), Some("io"));

    app.send_key(Key::Char(' '));
    assert_eq!(app.snippets().filter_panel.selected_tags(), vec!["io"]);
    assert_eq!(app.visible_snippet_names(), vec!["read_file"]);

    app.send_key(Key::Char('l'));
    app.send_key(Key::Enter);
    assert_eq!(app.snippets().filter_panel.selected_tags(), vec!["io", "math"]);
    assert_eq!(app.visible_snippet_names(), vec!["fib", "read_file", "hist"]);

    // Toggling again removes the tag
    app.send_key(Key::Char(' '));
    assert_eq!(app.snippets().filter_panel.selected_tags(), vec!["io"]);

    app.send_key(Key::Esc);
    assert_eq!(app.snippets().input_mode, InputMode::Normal);
    assert!(app.snippets().filter_panel.is_expanded());
}

#[test]
fn test_chip_cursor_wraps() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Tab);

    app.send_key(Key::Char('h'));
    assert_eq!(app.snippets().filter_panel.focused_tag(), Some("viz"));

    app.send_key(Key::Right);
    assert_eq!(app.snippets().filter_panel.focused_tag(), Some("io"));
}

#[test]
fn test_search_and_tags_combine() {
    let mut app = TestApp::with_snippets(library());

    app.send_key(Key::Tab);
    app.send_key(Key::Char('l'));
    app.send_key(Key::Char(' ')); // math
    app.send_key(Key::Tab);

    app.send_key(Key::Char('/'));
    app.type_text("hist");
    app.send_key(Key::Enter);

    assert_eq!(app.visible_snippet_names(), vec!["hist"]);
}

#[test]
fn test_collapsing_panel_keeps_selection() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Tab);
    app.send_key(Key::Char(' ')); // io

    app.send_key(Key::Char('t'));

    assert_eq!(app.snippets().input_mode, InputMode::Normal);
    assert!(!app.snippets().filter_panel.is_expanded());
    assert_eq!(app.snippets().filter_panel.selected_tags(), vec!["io"]);
    assert_eq!(app.visible_snippet_names(), vec!["read_file"]);
}

#[test]
fn test_reload_prunes_vanished_tags() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Tab);
    app.send_key(Key::Char(' ')); // io
    app.send_key(Key::Char('l'));
    app.send_key(Key::Char(' ')); // math
    app.send_key(Key::Esc);

    // The io snippet was deleted on disk
    let reloaded: Vec<Snippet> = library()
        .into_iter()
        .filter(|s| !s.has_tag("io"))
        .collect();
    app.send_data_event(DataEvent::SnippetsLoaded {
        library: SnippetLibrary::from_snippets(reloaded),
    });

    let panel = &app.snippets().filter_panel;
    assert_eq!(panel.vocabulary(), ["math", "viz"]);
    assert_eq!(panel.selected_tags(), vec!["math"]);
    assert_eq!(app.visible_snippet_names(), vec!["fib", "hist"]);
}

#[test]
fn test_reload_keeps_search_text() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('/'));
    app.type_text("fib");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::SnippetsLoaded {
        library: SnippetLibrary::from_snippets(library()),
    });

    assert_eq!(app.snippets().filter_panel.search_text(), "fib");
    assert_eq!(app.visible_snippet_names(), vec!["fib"]);
}

#[test]
fn test_reload_key_marks_loading() {
    let mut app = TestApp::with_snippets(library());

    app.send_key(Key::Char('r'));

    assert!(matches!(app.snippets().loading, LoadingState::Loading(_)));
    // The current library stays visible while loading
    assert_eq!(app.visible_snippet_names().len(), 4);
}

#[test]
fn test_load_error_is_shown() {
    let mut app = TestApp::new();

    app.send_data_event(DataEvent::LoadError {
        error: "Snippet directory not found: /nope".to_string(),
    });

    assert_eq!(
        app.snippets().loading,
        LoadingState::Error("Snippet directory not found: /nope".to_string())
    );
    assert!(app.visible_snippet_names().is_empty());
}

#[test]
fn test_list_navigation() {
    let mut app = TestApp::with_snippets(library());
    assert_eq!(selected_index(&app), Some(0));

    app.send_key(Key::Char('j'));
    assert_eq!(selected_index(&app), Some(1));
    assert_eq!(app.snippets().selected_snippet().map(|s| s.name.as_str()), Some("plot"));

    app.send_key(Key::Char('G'));
    assert_eq!(selected_index(&app), Some(3));

    // Wraps around
    app.send_key(Key::Char('j'));
    assert_eq!(selected_index(&app), Some(0));

    app.send_key(Key::Char('k'));
    assert_eq!(selected_index(&app), Some(3));

    app.send_keys(&[Key::Char('g'), Key::Char('g')]);
    assert_eq!(selected_index(&app), Some(0));
    assert_eq!(app.state().pending_key, None);
}

#[test]
fn test_filter_change_resets_selection() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('G'));

    app.send_key(Key::Char('/'));
    app.type_text("p");

    assert_eq!(selected_index(&app), Some(0));
}

#[test]
fn test_multi_key_sequence_cancelled() {
    let mut app = TestApp::with_snippets(library());

    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, Some('g'));

    app.send_key(Key::Char('x'));
    assert_eq!(app.state().pending_key, None);
    app.assert_screen_type(snippets_discriminant());
}

#[test]
fn test_esc_cancels_pending_g() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Char('G'));

    app.send_keys(&[Key::Char('g'), Key::Esc]);
    assert_eq!(app.state().pending_key, None);

    // A fresh 'g' starts a new sequence instead of completing 'gg'
    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, Some('g'));
    assert_eq!(selected_index(&app), Some(3));
}

#[test]
fn test_logs_navigation() {
    let mut app = TestApp::with_snippets(library());

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.assert_screen_type(logs_discriminant());

    // Repeating the sequence does not stack another logs screen
    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    assert_eq!(app.state().history.len(), 2);

    app.send_key(Key::Esc);
    app.assert_screen_type(snippets_discriminant());

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.send_keys(&[Key::Char('g'), Key::Char('s')]);
    app.assert_screen_type(snippets_discriminant());
}

#[test]
fn test_filter_survives_trip_to_logs() {
    let mut app = TestApp::with_snippets(library());
    app.send_key(Key::Tab);
    app.send_key(Key::Char(' ')); // io
    app.send_key(Key::Esc);

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.send_key(Key::Char('h'));

    app.assert_screen_type(snippets_discriminant());
    assert_eq!(app.visible_snippet_names(), vec!["read_file"]);
}

#[test]
fn test_back_at_root_is_noop() {
    let mut app = TestApp::with_snippets(library());

    app.send_key(Key::Char('h'));

    app.assert_screen_type(snippets_discriminant());
    assert_eq!(app.state().history.len(), 1);
    app.assert_not_quit();
}
