//! Identity glyph keyed by username.
//!
//! A 5×5 grid mirrored around the middle column, coloured and filled from
//! the SHA-256 digest of the key. Same key, same glyph; nothing is fetched.

#[cfg(test)]
#[path = "identicon_test.rs"]
mod identicon_test;

use leptos::prelude::*;
use sha2::{Digest, Sha256};

pub const GRID: usize = 5;

/// Filled cells and fill colour of one glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdenticonPattern {
    pub cells: [[bool; GRID]; GRID],
    /// `#rrggbb`
    pub color: String,
}

impl IdenticonPattern {
    pub fn from_key(key: &str) -> Self {
        let digest = Sha256::digest(key.as_bytes());
        let color = format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2]);

        let mut cells = [[false; GRID]; GRID];
        let half = GRID.div_ceil(2);
        for (row, line) in cells.iter_mut().enumerate() {
            for col in 0..half {
                let on = digest[3 + row * half + col] & 1 == 1;
                line[col] = on;
                line[GRID - 1 - col] = on;
            }
        }
        Self { cells, color }
    }

    /// `(column, row)` of each filled cell, row-major.
    pub fn filled(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter().enumerate().filter(|(_, on)| **on).map(move |(col, _)| (col, row))
            })
            .collect()
    }
}

/// Inline SVG identicon.
#[component]
pub fn Identicon(#[prop(into)] seed: String, #[prop(default = 100)] size: u32) -> impl IntoView {
    let pattern = IdenticonPattern::from_key(&seed);
    let color = pattern.color.clone();

    view! {
        <svg
            class="identicon"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 5 5"
            shape-rendering="crispEdges"
            aria-label=format!("identicon for {seed}")
        >
            {pattern
                .filled()
                .into_iter()
                .map(|(x, y)| view! { <rect x=x.to_string() y=y.to_string() width="1" height="1" fill=color.clone()></rect> })
                .collect::<Vec<_>>()}
        </svg>
    }
}
