//! End-to-end flows through the controllers, the language manager and the
//! shell state, without a window.

use quiz_gui::app::navigation::{NavigationRequest, Presentation, Screen};
use quiz_gui::app::shell::{ShellEffect, ShellState};
use quiz_gui::eventing::app_event::AppEvent;
use quiz_gui::features::language::controller::LanguageController;
use quiz_gui::features::welcome::controller::WelcomeController;
use quiz_gui::i18n::Language;
use quiz_gui::states::{LanguageManager, LocalizationProvider};

fn checkmarks(controller: &LanguageController, manager: &LanguageManager) -> Vec<bool> {
    controller.rows(manager).into_iter().map(|row| row.checked).collect()
}

#[test]
fn english_active_on_load() {
    let controller = LanguageController::new();
    let manager = LanguageManager::new(Language::English);

    let rows = controller.rows(&manager);
    let labels: Vec<_> = rows.iter().map(|row| row.label.to_string()).collect();

    assert_eq!(labels, vec!["English", "Türkçe"]);
    assert_eq!(checkmarks(&controller, &manager), vec![true, false]);
}

#[test]
fn tapping_turkish_moves_checkmark_and_rebuilds_once() {
    let controller = LanguageController::new();
    let mut manager = LanguageManager::new(Language::English);
    let mut shell = ShellState::new();
    shell.apply(&AppEvent::present(Screen::Login));
    shell.apply(&AppEvent::present(Screen::LanguageSettings));

    let event = controller.select_row(&mut manager, 1).expect("select");
    let effect = shell.apply(&event);

    assert_eq!(manager.current_language_code(), "turkish");
    assert_eq!(checkmarks(&controller, &manager), vec![false, true]);
    assert_eq!(effect, ShellEffect::Rebuilt);
    assert_eq!(shell.generation(), 1);
    assert_eq!(controller.title(&manager).as_ref(), "Dil");
}

#[test]
fn get_started_presents_login_once_full_screen() {
    let mut shell = ShellState::new();

    let effect = shell.apply(&WelcomeController::new().get_started());

    assert_eq!(effect, ShellEffect::Presented(Screen::Login));
    assert_eq!(
        shell.navigation().modals(),
        &[NavigationRequest {
            screen: Screen::Login,
            presentation: Presentation::FullScreen { animated: true },
        }]
    );
    assert_eq!(shell.navigation().current(), Screen::Login);
    assert_eq!(shell.generation(), 0);
}

#[test]
fn reselecting_active_language_still_rebuilds_once() {
    let controller = LanguageController::new();
    let mut manager = LanguageManager::new(Language::English);
    let mut shell = ShellState::new();

    let event = controller.select_row(&mut manager, 0).expect("select");
    assert_eq!(shell.apply(&event), ShellEffect::Rebuilt);

    assert_eq!(manager.current_language_code(), "english");
    assert_eq!(shell.generation(), 1);
}

#[test]
fn every_selection_leaves_exactly_one_checkmark() {
    let controller = LanguageController::new();
    let mut manager = LanguageManager::new(Language::English);
    let mut shell = ShellState::new();

    for (step, index) in [1, 1, 0, 1, 0].into_iter().enumerate() {
        let event = controller.select_row(&mut manager, index).expect("select");
        shell.apply(&event);

        let marks = checkmarks(&controller, &manager);
        assert_eq!(marks.iter().filter(|checked| **checked).count(), 1);
        assert!(marks[index]);
        assert_eq!(shell.generation(), step as u64 + 1);
    }
}

#[test]
fn selection_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("quiz-gui.toml");
    std::fs::write(&path, "language = \"english\"\n").expect("write");

    let controller = LanguageController::new();
    let mut manager = LanguageManager::load(path.clone()).expect("load");
    controller.select_row(&mut manager, 1).expect("select");

    let restarted = LanguageManager::load(path).expect("reload");
    assert_eq!(checkmarks(&controller, &restarted), vec![false, true]);
}
