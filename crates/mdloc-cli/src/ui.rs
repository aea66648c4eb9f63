// Macros for user-facing console lines. Results go to stdout, notices to stderr.

macro_rules! ui_ok {
    ($($arg:tt)*) => {{
        println!("✔ {}", format!($($arg)*));
    }};
}

macro_rules! ui_info {
    ($($arg:tt)*) => {{
        eprintln!("ℹ {}", format!($($arg)*));
    }};
}

macro_rules! ui_warn {
    ($($arg:tt)*) => {{
        let show_icon = std::io::IsTerminal::is_terminal(&std::io::stdout())
            && std::env::var_os("NO_ICONS").is_none();
        if show_icon {
            eprintln!("⚠ {}", format!($($arg)*));
        } else {
            eprintln!("{}", format!($($arg)*));
        }
    }};
}

macro_rules! ui_err {
    ($($arg:tt)*) => {{
        eprintln!("✖ {}", format!($($arg)*));
    }};
}
