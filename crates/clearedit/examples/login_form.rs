//! Login form example.
//!
//! Builds a password field from a TOML snippet and drives it with scripted
//! focus, typing, tap and delete-key events, printing the field state after
//! each step.
//!
//! Run with: cargo run -p clearedit --example login_form
//! Set `RUST_LOG=clearedit=debug` to see state transitions.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use clearedit::prelude::*;

const CONFIG: &str = r#"
quick_delete = true
decoration_padding = 6.0
max_length = 12
"#;

fn print_state(step: &str, field: &ClearEdit) {
    println!(
        "{step:<28} text={:<14?} focus={:<5} icon={:?}",
        field.text(),
        field.has_focus(),
        field.attached_variant()
    );
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClearEditConfig::from_toml_str(CONFIG)?;
    let icons = IconSet::new(
        IconImage::square("ic_clear_normal", 24),
        IconImage::square("ic_clear_pressed", 24),
    );

    let mut password = ClearEdit::from_config(&config, icons);
    password.set_size(Size::new(240.0, 44.0));
    password.set_padding(Insets::symmetric(12.0, 8.0));

    let deletes = Arc::new(AtomicUsize::new(0));
    let d = deletes.clone();
    password.set_password_deleted_handler(Some(Arc::new(move || {
        d.fetch_add(1, Ordering::SeqCst);
        true
    })));
    password.limit_reached.connect(|max| {
        println!("  -> input limit of {max} characters reached");
    });

    print_state("initial", &password);

    password.set_focused(true);
    print_state("focused", &password);

    for c in "correct horse".chars() {
        let text = c.to_string();
        password.key_press(&KeyPressEvent::new(
            Key::Unknown(0),
            KeyboardModifiers::NONE,
            text,
            false,
        ));
    }
    print_state("typed", &password);

    password.key_press(&KeyPressEvent::key(Key::Backspace));
    print_state("delete key", &password);

    let icon_x = 240.0 - 12.0 - 4.0;
    password.touch_event(&TouchEvent::at(TouchAction::Down, icon_x, 22.0));
    print_state("icon pressed", &password);

    password.touch_event(&TouchEvent::at(TouchAction::Move, 40.0, 22.0));
    print_state("dragged off icon", &password);

    password.touch_event(&TouchEvent::at(TouchAction::Move, icon_x, 22.0));
    password.touch_event(&TouchEvent::at(TouchAction::Up, icon_x, 22.0));
    print_state("released on icon", &password);

    password.set_text("hunter2");
    password.set_focused(false);
    print_state("blurred", &password);

    println!(
        "password-deleted listener called {} time(s)",
        deletes.load(Ordering::SeqCst)
    );
    Ok(())
}
