//! Descriptor parsing
//!
//! A key-spec string is interpreted, first match wins, as: bracketed send
//! token, bracketed action list, preset name, symbolic key name, literal
//! text. Malformed input never errors; it degrades to the next
//! interpretation, ending at literal text.

use log::{debug, trace};

use crate::context::EventContext;
use crate::preset::{PresetKey, PresetTable};
use crate::types::key_codes::{self, parse_send};
use crate::types::keymap;

use super::Event;

pub(super) fn resolve(spec: &str, presets: &PresetTable, ctx: &EventContext<'_>) -> Event {
    let mut ev = Event::blank();
    let mut spec = spec;
    let inner_owned;

    // {send|key}
    if let Some(inner) = braced_inner(spec) {
        ev.label = inner.to_string();
        let (code, mask) = parse_send(inner);
        ev.code = code;
        ev.mask = mask;
        if code > 0 || mask > 0 {
            return finish(ev);
        }
        if parse_action_list(inner, &mut ev) {
            return finish(ev);
        }
        // plain key name in braces: restart with the inner text
        inner_owned = inner.to_string();
        spec = &inner_owned;
        ev.label.clear();
        ev.code = 0;
        ev.mask = 0;
    }

    if let Some(preset) = presets.get(spec) {
        apply_preset(&mut ev, spec, preset, ctx);
    } else {
        let code = click_code(spec);
        if code >= 0 {
            ev.code = code;
            derive_label(&mut ev, ctx);
        } else {
            ev.code = 0;
            ev.text = Some(spec.to_string());
            ev.label = strip_braced(spec);
        }
    }

    finish(ev)
}

/// Copies a preset record into the event, applying the field defaults.
fn apply_preset(ev: &mut Event, spec: &str, preset: &PresetKey, ctx: &EventContext<'_>) {
    ev.command = preset.command.clone();
    ev.option = preset.option.clone();
    ev.select = preset.select.clone();
    ev.toggle = preset.toggle.clone();
    ev.label = preset.label.clone();
    ev.preview = preset.preview.clone();
    ev.shift_lock = preset.shift_lock.clone();
    ev.commit = preset.commit.clone();

    // a command with no send key presses the function key
    let send = if preset.send.is_empty() && !preset.command.is_empty() {
        "function"
    } else {
        preset.send.as_str()
    };
    let (code, mask) = parse_send(send);
    ev.code = code;
    ev.mask = mask;
    derive_label(ev, ctx);

    ev.text = preset.text.clone();
    if ev.code < 0 && ev.text.as_deref().unwrap_or("").is_empty() {
        ev.text = Some(spec.to_string());
    }
    ev.states = preset.states.clone();
    ev.sticky = preset.sticky;
    ev.repeatable = preset.repeatable;
    ev.functional = preset.functional;
}

/// Fills the label from the resolved code when the spec gave none.
///
/// The space key labels itself with the active schema name, frozen at
/// resolve time.
fn derive_label(ev: &mut Event, ctx: &EventContext<'_>) {
    if !ev.label.is_empty() {
        return;
    }
    if ev.code == key_codes::SPACE {
        ev.label = ctx.engine.schema_name();
    } else if ev.code > 0 {
        ev.label = key_codes::display_label(ev.code, ev.mask);
    }
}

/// Symbolic resolution: empty descriptors are void keys, unknown names negative.
fn click_code(spec: &str) -> i32 {
    if spec.is_empty() {
        return 0;
    }
    key_codes::keycode_from_name(spec)
}

/// Seeds the shifted label once the unshifted one is final.
fn finish(mut ev: Event) -> Event {
    ev.shift_label = ev.label.clone();
    if keymap::is_std_key(ev.code) && keymap::is_printing(ev.code) {
        if let Some(ch) = keymap::key_char(ev.code, true) {
            trace!("shift label for code {}: {:?}", ev.code, ch);
            ev.shift_label = ch.to_string();
        }
    }
    ev
}

/// Inner text of a spec that is exactly one non-nested `{...}` pair.
fn braced_inner(spec: &str) -> Option<&str> {
    let inner = spec.strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() || inner.contains('{') || inner.contains('}') {
        return None;
    }
    Some(inner)
}

/// Parses `key=value` segments; recognized keys are `commit`, `label` and
/// `text`. Segments without `=` and unrecognized keys are dropped silently;
/// only the first `=` of a segment splits, the value keeps the rest.
fn parse_action_list(inner: &str, ev: &mut Event) -> bool {
    let mut recognized = false;
    for segment in inner.split(',') {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        match key {
            "commit" => {
                ev.commit = value.to_string();
                recognized = true;
            }
            "label" => {
                ev.label = value.to_string();
                recognized = true;
            }
            "text" => {
                ev.text = Some(value.to_string());
                recognized = true;
            }
            _ => {}
        }
    }
    if recognized {
        debug!(
            "action spec {:?}: text={:?} commit={:?} label={:?}",
            inner, ev.text, ev.commit, ev.label
        );
    }
    recognized
}

/// Deletes every minimal non-nested `{...}` group from literal text.
///
/// This intentionally strips the groups instead of unwrapping them; the
/// bracket form keeps inner text, literal labels lose it.
fn strip_braced(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        out.push_str(head);
        match tail[1..].find(|c| c == '{' || c == '}') {
            Some(pos) if pos > 0 && tail[1 + pos..].starts_with('}') => {
                rest = &tail[1 + pos + 1..];
            }
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braced_inner_requires_single_pair() {
        assert_eq!(braced_inner("{space}"), Some("space"));
        assert_eq!(braced_inner("{a=b,c=d}"), Some("a=b,c=d"));
        assert_eq!(braced_inner("space"), None);
        assert_eq!(braced_inner("{}"), None);
        assert_eq!(braced_inner("{a}{b}"), None);
        assert_eq!(braced_inner("{{a}}"), None);
        assert_eq!(braced_inner("{a"), None);
    }

    #[test]
    fn strip_braced_deletes_groups() {
        assert_eq!(strip_braced("a{x}b{y}c"), "abc");
        assert_eq!(strip_braced("{Left}"), "");
        assert_eq!(strip_braced("no braces"), "no braces");
    }

    #[test]
    fn strip_braced_keeps_malformed_groups() {
        assert_eq!(strip_braced("a{}b"), "a{}b");
        assert_eq!(strip_braced("{{x}}"), "{}");
        assert_eq!(strip_braced("a{b"), "a{b");
        assert_eq!(strip_braced("a}b"), "a}b");
    }

    #[test]
    fn action_list_policy() {
        let mut ev = Event::blank();
        assert!(parse_action_list("commit=abc,label=X", &mut ev));
        assert_eq!(ev.commit, "abc");
        assert_eq!(ev.label, "X");

        // value keeps everything after the first '='
        let mut ev = Event::blank();
        assert!(parse_action_list("text=a=b", &mut ev));
        assert_eq!(ev.text.as_deref(), Some("a=b"));

        // unrecognized keys and bare segments are dropped
        let mut ev = Event::blank();
        assert!(!parse_action_list("sound=click,plain", &mut ev));
    }
}
