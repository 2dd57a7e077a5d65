// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Language resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files, optionally extended from a directory
//! - Runtime language switching
//! - Fallback to French, then to the key itself, when translations are missing
//!
//! The [`fluent::I18n`] value is owned by the application root and handed to
//! every view by reference; nothing reads the language from a global.

pub mod fluent;
