// SPDX-License-Identifier: MIT
//
// sift-term: terminal data model for sift.
//
// The leaf crate of the presentation layer: what a color is, what a cell
// holds, how colors and attributes encode as SGR, and which input events
// the application's main loop can receive. No terminal I/O happens here;
// backends in `sift-render` consume these types.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod click;
pub mod color;
pub mod input;
