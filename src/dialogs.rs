//! Modal dialogs: message box, drop-down box, string entry.
//!
//! Each dialog opens a transient sub-surface sized to its content, runs
//! its own blocking input loop independent of the parent window's loop,
//! and returns a single result. On return the sub-surface is torn down
//! but its cells are NOT erased: stale pixels are expected, and erasing
//! them is the parent's responsibility on its next full redraw.

use crate::backend::{Attr, Backend, SurfaceId};
use crate::draw::{self, Frame};
use crate::error::{Error, Result};
use crate::event::{InputEvent, Key};
use crate::markup::{CctMessage, Colors};
use crate::widget::{LineState, ListState};
use crate::window::Window;

/// A message box lays out at most this many choices on its one row.
pub const MAX_CHOICES: usize = 3;

// ---------------------------------------------------------------------------
// message_box
// ---------------------------------------------------------------------------

/// Show a message with up to three selectable choices; return the chosen
/// one.
///
/// No choices defaults to a single `"Ok"`. Left/Right move the
/// selection, Enter confirms. When an explicit `"Cancel"` choice is
/// present it is also selectable via Escape, bypassing navigation;
/// without one, Escape is ignored. More than [`MAX_CHOICES`] choices
/// fail with [`Error::TooManyChoices`].
pub fn message_box<B: Backend>(
    win: &mut Window<B>,
    message: &str,
    choices: &[&str],
    border: &str,
) -> Result<String> {
    let choices: Vec<&str> = if choices.is_empty() {
        vec!["Ok"]
    } else {
        choices.to_vec()
    };
    if choices.len() > MAX_CHOICES {
        return Err(Error::TooManyChoices(
            choices.iter().map(|&c| c.to_owned()).collect(),
        ));
    }
    let has_cancel = choices.contains(&"Cancel");

    let (cct_choices, cct_message, border_pair) = {
        let mut colors = Colors::new(&mut win.pairs, &mut win.backend);
        (
            colors.parse_all(&choices)?,
            colors.parse(message)?,
            colors.resolve(border)?,
        )
    };

    // Sized to whichever is wider: the choice row or the message.
    let choices_len =
        (cct_choices.len() + 1) * 2 + cct_choices.iter().map(CctMessage::len).sum::<usize>();
    let w_width = choices_len.max(cct_message.len() + 4) as i32;
    let w_height = 7;
    let (height, width) = win.backend.size(SurfaceId::ROOT);
    let surface = win.backend.create_surface(
        (height - w_height) / 2,
        (width - w_width) / 2,
        w_height,
        w_width,
    )?;

    {
        let mut frame = Frame::new(&mut win.backend, surface);
        draw::draw_borders(&mut frame, Attr::pair(border_pair))?;
        cct_message.draw(&mut frame, 2, 2, Attr::NORMAL)?;
    }

    let blank_row = " ".repeat((w_width - 2).max(0) as usize);
    let mut choice_id = 0usize;
    let chosen = loop {
        {
            let mut frame = Frame::new(&mut win.backend, surface);
            frame.print(w_height - 3, 1, &blank_row, Attr::NORMAL)?;
            let mut pos = 3i32;
            for (i, choice) in cct_choices.iter().enumerate() {
                let len = choice.len() as i32;
                if i == choice_id {
                    let bracket = format!("[{}]", " ".repeat(len as usize));
                    frame.print(w_height - 3, pos - 2, &bracket, Attr::NORMAL)?;
                }
                choice.draw(&mut frame, w_height - 3, pos - 1, Attr::NORMAL)?;
                pos += len + 2;
            }
        }
        win.backend.present(surface)?;

        match win.backend.next_event()? {
            InputEvent::Key(Key::Left) => {
                choice_id = choice_id.checked_sub(1).unwrap_or(choices.len() - 1);
            }
            InputEvent::Key(Key::Right) => {
                choice_id = (choice_id + 1) % choices.len();
            }
            InputEvent::Key(Key::Enter) => break choices[choice_id].to_owned(),
            InputEvent::Key(Key::Escape) if has_cancel => break "Cancel".to_owned(),
            _ => {}
        }
    };

    win.backend.drop_surface(surface)?;
    Ok(chosen)
}

// ---------------------------------------------------------------------------
// drop_down_box
// ---------------------------------------------------------------------------

/// Show a scrollable option list at (y, x); return the chosen indices.
///
/// Up/Down scroll, Enter chooses, Escape dismisses. An empty result
/// signals the user dismissed without choosing; empty `options`
/// short-circuit to the same.
pub fn drop_down_box<B: Backend>(
    win: &mut Window<B>,
    options: &[&str],
    window_size: usize,
    y: i32,
    x: i32,
    border: &str,
) -> Result<Vec<usize>> {
    if options.is_empty() {
        return Ok(Vec::new());
    }
    let (cct_options, border_pair) = {
        let mut colors = Colors::new(&mut win.pairs, &mut win.backend);
        (colors.parse_all(options)?, colors.resolve(border)?)
    };

    let height = window_size as i32 + 2;
    let width = cct_options.iter().map(CctMessage::len).max().unwrap_or(0) as i32 + 3;
    let surface = win.backend.create_surface(y, x, height, width)?;

    let mut list = ListState::new(cct_options, window_size);
    let blank_row = " ".repeat((width - 2).max(0) as usize);
    let border_attr = Attr::pair(border_pair);

    {
        let mut frame = Frame::new(&mut win.backend, surface);
        draw::draw_borders(&mut frame, border_attr)?;
    }

    let chosen = loop {
        {
            let mut frame = Frame::new(&mut win.backend, surface);
            // Restore the border cells the arrows may have covered.
            frame.put(1, width - 1, draw::VLINE, border_attr)?;
            frame.put(height - 2, width - 1, draw::VLINE, border_attr)?;
            for row in 1..height - 1 {
                frame.print(row, 1, &blank_row, Attr::NORMAL)?;
            }
            list.draw(&mut frame, 1, 1, true)?;
            if list.len() > window_size {
                if list.page_offset() != 0 {
                    frame.put(1, width - 1, draw::UARROW, border_attr)?;
                }
                if list.page_offset() != list.len() - window_size {
                    frame.put(height - 2, width - 1, draw::DARROW, border_attr)?;
                }
            }
        }
        win.backend.present(surface)?;

        match win.backend.next_event()? {
            InputEvent::Key(Key::Escape) => break Vec::new(),
            InputEvent::Key(Key::Up) => list.scroll_up(),
            InputEvent::Key(Key::Down) => list.scroll_down(),
            InputEvent::Key(Key::Enter) => break vec![list.choice()],
            _ => {}
        }
    };

    win.backend.drop_surface(surface)?;
    Ok(chosen)
}

// ---------------------------------------------------------------------------
// enter_string
// ---------------------------------------------------------------------------

/// Prompt for a line of text; return it when Enter is pressed.
///
/// The edit field starts with `text` (which must fit `max_len`) and
/// accepts the line-edit allow-list; everything else is dropped.
pub fn enter_string<B: Backend>(
    win: &mut Window<B>,
    text: &str,
    prompt: &str,
    max_len: usize,
    border: &str,
) -> Result<String> {
    let mut line = LineState::new(text, max_len)?;
    let (cct_prompt, border_pair) = {
        let mut colors = Colors::new(&mut win.pairs, &mut win.backend);
        (colors.parse(prompt)?, colors.resolve(border)?)
    };

    let w_height = 5;
    let w_width = 2 + cct_prompt.len() as i32 + 2 + max_len as i32 + 2;
    let (height, width) = win.backend.size(SurfaceId::ROOT);
    let surface = win.backend.create_surface(
        (height - w_height) / 2,
        (width - w_width) / 2,
        w_height,
        w_width,
    )?;

    let edit_x = cct_prompt.len() as i32 + 4;
    {
        let mut frame = Frame::new(&mut win.backend, surface);
        draw::draw_borders(&mut frame, Attr::pair(border_pair))?;
        cct_prompt.draw(&mut frame, 2, 2, Attr::NORMAL)?;
        frame.print(2, edit_x - 2, ": ", Attr::NORMAL)?;
    }

    loop {
        {
            let mut frame = Frame::new(&mut win.backend, surface);
            line.draw(&mut frame, 2, edit_x, true, Attr::NORMAL)?;
        }
        win.backend.present(surface)?;

        match win.backend.next_event()? {
            InputEvent::Key(Key::Enter) => break,
            InputEvent::Key(Key::Left) => line.move_cursor_left(),
            InputEvent::Key(Key::Right) => line.move_cursor_right(),
            InputEvent::Key(Key::Backspace) => line.delete_selected(),
            InputEvent::Key(Key::Char(ch)) => line.add_char(ch),
            _ => {}
        }
    }

    win.backend.drop_surface(surface)?;
    Ok(line.content().to_owned())
}

// ===========================================================================
// Tests
// ===========================================================================
