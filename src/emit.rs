//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! The tag emitter: the single funnel every recognizer calls through to turn a
//! captured name into zero, one, or two [`Tag`] records, and to open the scope a
//! container kind admits.

use crate::position::Position;
use crate::scanner::Scanner;
use crate::tag::{Tag, TagKind};

/// A member captured before its enclosing container tag exists (enum members
/// inside `{...}`; a class's saved `#(...)` parameters) and drained into the
/// container's scope once it is created.
#[derive(Debug, Clone)]
pub struct PendingMember {
    pub name: String,
    pub position: Position,
    /// Already-resolved `parameter` attribute; bypasses the localparam/parameter
    /// polarity logic in [`emit`] since it was decided at capture time.
    pub parameter_attribute: bool,
}

/// Distinguishes the three ways a recognizer can hand a captured name to the
/// emitter.
#[derive(Clone, Copy)]
pub enum EmitSource {
    /// Rewritten to `constant`, never overridable.
    Localparam,
    /// Rewritten to `constant`; overridable unless the enclosing scope is a
    /// `class`/`package` or already has a parameter list.
    Parameter,
    /// A drained [`PendingMember`] whose `parameter` attribute was already decided.
    PreResolvedConstant(bool),
    /// Any other externally visible kind, used as-is.
    Tag(TagKind),
}

/// Emits `name` captured at `position`. Returns the kind actually recorded, or
/// `None` if the emission was suppressed (step 3).
pub fn emit(
    scanner: &mut Scanner,
    name: &str,
    source: EmitSource,
    position: Position,
    inheritance: Option<String>,
) -> Option<TagKind> {
    let (mut kind, parameter_attribute) = match source {
        EmitSource::Localparam => (TagKind::Constant, false),
        EmitSource::Parameter => {
            let ctx = scanner.scope.current();
            let suppressed =
                matches!(ctx.kind, Some(TagKind::Class) | Some(TagKind::Package)) || ctx.has_param_list;
            (TagKind::Constant, !suppressed)
        }
        EmitSource::PreResolvedConstant(attr) => (TagKind::Constant, attr),
        EmitSource::Tag(k) => (k, false),
    };

    // step 2: a pending prototype hint overrides whatever kind was resolved above.
    // Cleared here rather than left for `handle_semicolon` to find: the header
    // recognizer (e.g. a port list) may itself consume straight through the
    // terminating `;`, so the main loop never sees it to clear the flag.
    if scanner.scope.current().prototype {
        kind = TagKind::Prototype;
        scanner.scope.current_mut().prototype = false;
    }

    // step 3: empty name or a disabled kind suppresses the emission entirely.
    if name.is_empty() || !scanner.config.is_kind_enabled(kind) {
        return None;
    }

    let parent = scanner.scope.current();
    let scope_name = if parent.is_root() {
        None
    } else {
        Some(parent.qualified_name.clone())
    };
    let scope_kind = parent.kind;

    let tag = Tag {
        name: name.to_string(),
        kind,
        position,
        scope_name: scope_name.clone(),
        scope_kind,
        inheritance: inheritance.clone(),
        parameter_attribute,
        qualified: false,
    };

    // step 5 reads the pre-push scope; compute the qualified twin before the tag
    // (which may itself open a scope) is handed to the sink.
    let qualified_tag = if scanner.config.qualified_tags && scope_name.is_some() {
        Some(Tag {
            name: tag.fully_qualified_name(),
            kind,
            position,
            scope_name: scope_name.clone(),
            scope_kind,
            inheritance,
            parameter_attribute,
            qualified: true,
        })
    } else {
        None
    };

    scanner.emit_tag(tag);
    if let Some(qtag) = qualified_tag {
        scanner.emit_tag(qtag);
    }

    scanner.scope.current_mut().last_kind = Some(kind);

    // step 6: containers open a scope and absorb any queued members.
    if kind.is_container() {
        scanner.scope.push_context(kind, name);
        let pending = std::mem::take(&mut scanner.tag_contents);
        for member in pending {
            emit(
                scanner,
                &member.name,
                EmitSource::PreResolvedConstant(member.parameter_attribute),
                member.position,
                None,
            );
        }
        if kind.is_transient_container() {
            scanner.scope.pop();
        }
    }

    Some(kind)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    fn new_scanner(source: &str) -> Scanner<'_> {
        Scanner::new(source, ScanConfig::new(Language::SystemVerilog))
    }

    #[test]
    fn plain_tag_emits_one_record_at_root() {
        let mut scanner = new_scanner("");
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        emit(
            &mut scanner,
            "m",
            EmitSource::Tag(TagKind::Module),
            Position::new(),
            None,
        );
        assert_eq!(sink.tags.len(), 1);
        assert_eq!(sink.tags[0].scope_name, None);
        assert!(scanner.scope.current().is_root() == false);
    }

    #[test]
    fn parameter_is_overridable_outside_class_and_package() {
        let mut scanner = new_scanner("");
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        emit(
            &mut scanner,
            "N",
            EmitSource::Parameter,
            Position::new(),
            None,
        );
        assert!(sink.tags[0].parameter_attribute);
    }

    #[test]
    fn parameter_inside_package_is_not_overridable() {
        let mut scanner = new_scanner("");
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        emit(
            &mut scanner,
            "pkg",
            EmitSource::Tag(TagKind::Package),
            Position::new(),
            None,
        );
        emit(
            &mut scanner,
            "N",
            EmitSource::Parameter,
            Position::new(),
            None,
        );
        assert_eq!(sink.tags.len(), 2);
        assert!(!sink.tags[1].parameter_attribute);
        assert_eq!(sink.tags[1].scope_name.as_deref(), Some("pkg"));
    }

    #[test]
    fn transient_container_scope_is_dropped_after_draining_members() {
        let mut scanner = new_scanner("");
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        scanner.tag_contents.push(PendingMember {
            name: "A".to_string(),
            position: Position::new(),
            parameter_attribute: false,
        });
        emit(
            &mut scanner,
            "e_t",
            EmitSource::Tag(TagKind::Typedef),
            Position::new(),
            None,
        );
        assert_eq!(sink.tags.len(), 2);
        assert_eq!(sink.tags[0].kind, TagKind::Typedef);
        assert_eq!(sink.tags[1].kind, TagKind::Constant);
        assert_eq!(sink.tags[1].scope_name.as_deref(), Some("e_t"));
        assert!(scanner.scope.current().is_root());
    }

    #[test]
    fn disabled_kind_suppresses_emission() {
        let mut scanner = new_scanner("");
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.config.enabled_kinds.disable(TagKind::Net);
        scanner.bind(&mut sink, &mut diag);
        let result = emit(
            &mut scanner,
            "w",
            EmitSource::Tag(TagKind::Net),
            Position::new(),
            None,
        );
        assert!(result.is_none());
        assert!(sink.tags.is_empty());
    }
}
