// This file is part of the Wave language project.
// Copyright (c) 2024–2026 Wave Foundation
// Copyright (c) 2024–2026 LunaStev and contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Minimal ANSI colouring for diagnostics and trace output.
//!
//! Colours are given as `"r,g,b"` or `"#rrggbb"`. Setting `NO_COLOR`
//! (any value) turns every helper into a plain pass-through.

use std::env;

pub const RED: &str = "#e5484d";
pub const GREEN: &str = "2,161,47";
pub const YELLOW: &str = "#f5d90a";
pub const BLUE: &str = "#3e63dd";
pub const CYAN: &str = "#05a2c2";
pub const GREY: &str = "128,128,128";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8, u8, u8);

impl Color {
    pub fn from_rgb(rgb: &str) -> Result<Color, &'static str> {
        let parts: Vec<&str> = rgb.split(',').map(|p| p.trim()).collect();
        if parts.len() == 3 {
            let r = parts[0].parse::<u8>().map_err(|_| "Invalid RGB format")?;
            let g = parts[1].parse::<u8>().map_err(|_| "Invalid RGB format")?;
            let b = parts[2].parse::<u8>().map_err(|_| "Invalid RGB format")?;
            Ok(Color(r, g, b))
        } else {
            Err("Invalid RGB format")
        }
    }

    pub fn from_hex(hex: &str) -> Result<Color, &'static str> {
        if hex.len() != 7 || !hex.starts_with('#') {
            return Err("Invalid HEX format");
        }

        let r = u8::from_str_radix(&hex[1..3], 16).map_err(|_| "Invalid HEX value")?;
        let g = u8::from_str_radix(&hex[3..5], 16).map_err(|_| "Invalid HEX value")?;
        let b = u8::from_str_radix(&hex[5..7], 16).map_err(|_| "Invalid HEX value")?;

        Ok(Color(r, g, b))
    }

    pub fn parse(spec: &str) -> Result<Color, &'static str> {
        if spec.starts_with('#') {
            Color::from_hex(spec)
        } else {
            Color::from_rgb(spec)
        }
    }
}

pub fn colors_enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

fn wrap(code: &str, text: &str) -> String {
    if colors_enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub trait Colorize {
    fn color(&self, color: &str) -> String;
    fn bold(&self) -> String;
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn color(&self, color: &str) -> String {
        match Color::parse(color) {
            Ok(c) => wrap(&format!("38;2;{};{};{}", c.0, c.1, c.2), self.as_ref()),
            Err(_) => self.as_ref().to_string(),
        }
    }

    fn bold(&self) -> String {
        wrap("1", self.as_ref())
    }

    fn dim(&self) -> String {
        wrap("2", self.as_ref())
    }
}
