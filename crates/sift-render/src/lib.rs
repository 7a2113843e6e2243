// SPDX-License-Identifier: MIT
//
// sift-render: the drawing contract for sift.
//
// The finder's screens talk to a `Renderer` and the `Window`s it opens.
// Every draw call names a semantic role; the renderer's palette, resolved
// once in `init`, turns roles into colors. Input reaches the main loop
// through `Renderer::next_event`, which also marks double-clicks.
//
// `headless` is the in-memory backend. It implements the full contract
// and is what the test suite drives.

pub mod error;
pub mod headless;
pub mod options;
pub mod renderer;

pub use error::{ConfigError, RenderError};
pub use headless::{HeadlessRenderer, HeadlessWindow, SizeHandle};
pub use options::RendererOptions;
pub use renderer::{Renderer, Size, Window};
