//! Input sources: where the driver gets its next event from.

use std::collections::VecDeque;
use std::io;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::InputEvent;

/// A blocking producer of discrete user intents.
pub trait InputSource {
    /// Block until the next recognized event is available.
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Reads key presses from the terminal through crossterm.
///
/// The terminal must already be in raw mode (see the term crate), otherwise
/// arrow keys arrive line-buffered and Ctrl-C becomes a signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        first_input(std::iter::repeat_with(event::read))
    }
}

/// The intent carried by one terminal event, if any.
///
/// Only key presses count: releases and auto-repeats are not moves, and
/// resize, mouse and focus events are ignored along with unmapped keys.
pub fn key_press_input(ev: &Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(*key),
        _ => None,
    }
}

/// Consume events until one maps to an [`InputEvent`].
///
/// Read errors are returned as they arrive; a stream that ends before any
/// recognized key is an error too.
pub fn first_input<I>(events: I) -> Result<InputEvent>
where
    I: IntoIterator<Item = io::Result<Event>>,
{
    for ev in events {
        let ev = ev.context("reading terminal event")?;
        if let Some(input) = key_press_input(&ev) {
            return Ok(input);
        }
    }
    Err(anyhow!("terminal event stream ended"))
}

/// Replays a fixed sequence of events. Errors once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input exhausted"))
    }
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn next_event(&mut self) -> Result<InputEvent> {
        (**self).next_event()
    }
}
