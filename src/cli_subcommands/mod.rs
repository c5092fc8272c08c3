mod config;
mod key;
mod locale;
mod shell;
mod translate;

pub(crate) use self::config::ConfigCommands;
pub(crate) use self::key::KeyCommands;
pub(crate) use self::locale::LocaleCommands;
pub(crate) use self::shell::ShellCommands;
pub(crate) use self::translate::TranslateCommands;
