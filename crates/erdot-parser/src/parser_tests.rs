//! Scenario tests for the block scanner and document assembly.

use erdot_core::{
    color::DEFAULT_ENTITY_COLOR,
    document::Document,
    entity::Entity,
    relation::Cardinality,
};

use crate::{
    Parser, ParserConfig,
    error::{Diagnostic, DiagnosticCode, LabelRole},
};

/// Helper to parse with the default configuration.
fn parse(source: &str) -> (Document, Vec<Diagnostic>) {
    Parser::new(ParserConfig::default()).parse(source).into_parts()
}

/// Helper to collect the codes of all warnings.
fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
    diagnostics.iter().filter_map(Diagnostic::code).collect()
}

/// Source text under the context labels of a warning.
fn context_text<'a>(source: &'a str, diagnostic: &Diagnostic) -> Vec<&'a str> {
    diagnostic
        .labels()
        .iter()
        .filter(|label| label.role() == LabelRole::Context)
        .map(|label| &source[label.span().start()..label.span().end()])
        .collect()
}

fn entity_names(document: &Document) -> Vec<&str> {
    document.entities().iter().map(Entity::name).collect()
}

#[cfg(test)]
mod entity_tests {
    use super::*;

    #[test]
    fn test_entity_with_color_and_attributes() {
        let source = r##"
[User] {"color": "#ffffff"}
*id
name
"##;
        let (document, diagnostics) = parse(source);

        assert!(diagnostics.is_empty());
        assert_eq!(document.entities().len(), 1);

        let user = &document.entities()[0];
        assert_eq!(user.name(), "User");
        assert_eq!(user.color(), "#ffffff");
        assert_eq!(user.attributes().len(), 2);
        assert_eq!(user.attributes()[0].display_name(), "id");
        assert!(user.attributes()[0].is_primary());
        assert!(!user.attributes()[0].is_foreign());
        assert_eq!(user.attributes()[1].display_name(), "name");
        assert!(!user.attributes()[1].is_primary());
        assert!(!user.attributes()[1].is_foreign());
    }

    #[test]
    fn test_entity_without_options_uses_default_color() {
        let (document, _) = parse("[Order]\n*id\n+user_id");
        assert_eq!(document.entities()[0].color(), DEFAULT_ENTITY_COLOR);
    }

    #[test]
    fn test_configured_default_color() {
        let parsed = Parser::new(ParserConfig::new("white")).parse("[Order]\n*id");
        assert_eq!(parsed.document().entities()[0].color(), "white");
    }

    #[test]
    fn test_truncated_options_fall_back_to_default() {
        let source = "[User] {\"color\": \"#ffffff\"\n*id\nname";
        let (document, diagnostics) = parse(source);

        let user = &document.entities()[0];
        assert_eq!(user.color(), DEFAULT_ENTITY_COLOR);
        assert_eq!(user.attributes().len(), 2);
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W002]);
    }

    #[test]
    fn test_non_object_options_fall_back_to_default() {
        let (document, diagnostics) = parse("[User] color=red\nid");
        assert_eq!(document.entities()[0].color(), DEFAULT_ENTITY_COLOR);
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W002]);
    }

    #[test]
    fn test_options_span_covers_option_text() {
        let source = "  [User] {oops}  \nid";
        let (_, diagnostics) = parse(source);

        let span = diagnostics[0].primary_span().unwrap();
        assert_eq!(&source[span.start()..span.end()], "{oops}");
    }

    #[test]
    fn test_option_warnings_point_at_header() {
        let source = "  [User] {oops}  \nid\n\n[Order] {\"color\": \"blurple\"}";
        let (_, diagnostics) = parse(source);

        assert_eq!(codes(&diagnostics), [DiagnosticCode::W002, DiagnosticCode::W005]);
        assert_eq!(context_text(source, &diagnostics[0]), ["[User]"]);
        assert_eq!(context_text(source, &diagnostics[1]), ["[Order]"]);
    }

    #[test]
    fn test_unrecognized_color_is_kept_with_warning() {
        let (document, diagnostics) = parse(r#"[User] {"color": "blurple"}"#);
        assert_eq!(document.entities()[0].color(), "blurple");
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W005]);
    }

    #[test]
    fn test_empty_color_uses_default() {
        let (document, diagnostics) = parse(r#"[User] {"color": "  "}"#);
        assert_eq!(document.entities()[0].color(), DEFAULT_ENTITY_COLOR);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_option_keys_are_ignored() {
        let (document, diagnostics) = parse(r#"[User] {"shape": "box", "color": "white"}"#);
        assert_eq!(document.entities()[0].color(), "white");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_entity_names_are_trimmed() {
        let (document, _) = parse("[  Line Item  ]\n  qty  ");
        assert_eq!(document.entities()[0].name(), "Line Item");
        assert_eq!(document.entities()[0].attributes()[0].display_name(), "qty");
    }

    #[test]
    fn test_all_marker_kinds() {
        let (document, _) = parse("[T]\n*a\n+b\n*+c\n+*d\ne");
        let flags: Vec<_> = document.entities()[0]
            .attributes()
            .iter()
            .map(|attr| (attr.display_name(), attr.is_primary(), attr.is_foreign()))
            .collect();

        assert_eq!(
            flags,
            [
                ("a", true, false),
                ("b", false, true),
                ("c", true, true),
                ("d", true, true),
                ("e", false, false),
            ]
        );
    }

    #[test]
    fn test_header_only_entity() {
        let (document, diagnostics) = parse("[Empty]");
        assert!(document.entities()[0].attributes().is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_second_header_in_block_starts_new_entity() {
        let (document, _) = parse("[A]\nx\n[B]\ny");
        assert_eq!(entity_names(&document), ["A", "B"]);
        assert_eq!(document.entities()[0].attributes()[0].display_name(), "x");
        assert_eq!(document.entities()[1].attributes()[0].display_name(), "y");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let (document, _) = parse("[A]\nx\n\n[A]\ny");
        assert_eq!(entity_names(&document), ["A", "A"]);
    }

    #[test]
    fn test_relation_shaped_line_inside_entity_is_attribute() {
        let (document, _) = parse("[A]\nUser 1--* Order");
        assert!(document.relations().is_empty());
        assert_eq!(
            document.entities()[0].attributes()[0].display_name(),
            "User 1--* Order"
        );
    }
}

#[cfg(test)]
mod comment_tests {
    use super::*;

    #[test]
    fn test_comments_are_collected_in_order() {
        let (document, diagnostics) = parse("[User]\n# first\n*id\n#second  \nname");
        let user = &document.entities()[0];

        assert!(diagnostics.is_empty());
        assert_eq!(user.comments(), ["first", "second"]);
        let names: Vec<_> = user.attributes().iter().map(|a| a.display_name()).collect();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn test_comments_before_header_attach_to_entity() {
        let (document, diagnostics) = parse("# leading\n[User]\n# trailing\nid");
        assert!(diagnostics.is_empty());
        assert_eq!(document.entities()[0].comments(), ["leading", "trailing"]);
    }

    #[test]
    fn test_comment_without_entity_is_reported() {
        let (document, diagnostics) = parse("# orphan\n\n[User]\nid");
        assert!(document.entities()[0].comments().is_empty());
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W004]);
    }

    #[test]
    fn test_orphan_comment_points_at_its_block() {
        let source = "# orphan\nUser 1--* Order\n\n[User]";
        let (document, diagnostics) = parse(source);

        assert_eq!(document.relations().len(), 1);
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W004]);
        assert_eq!(
            context_text(source, &diagnostics[0]),
            ["# orphan\nUser 1--* Order"]
        );
    }

    #[test]
    fn test_comments_belong_to_their_own_entity() {
        let (document, _) = parse("[A]\n# about a\n[B]\n# about b");
        assert_eq!(document.entities()[0].comments(), ["about a"]);
        assert_eq!(document.entities()[1].comments(), ["about b"]);
    }
}

#[cfg(test)]
mod relation_tests {
    use super::*;

    #[test]
    fn test_relation_cardinalities_are_cross_assigned() {
        let (document, diagnostics) = parse("User 1--* Order");
        assert!(diagnostics.is_empty());

        let relation = &document.relations()[0];
        assert_eq!(relation.from_entity(), "User");
        assert_eq!(relation.to_entity(), "Order");
        assert_eq!(relation.from_cardinality().label(), "0..N");
        assert_eq!(relation.to_cardinality().label(), "1");
    }

    #[test]
    fn test_every_symbol_pair() {
        let (document, _) = parse("A?--+B\nC+--?D\nE*--1F");
        let labels: Vec<_> = document
            .relations()
            .iter()
            .map(|r| (r.from_cardinality(), r.to_cardinality()))
            .collect();

        assert_eq!(
            labels,
            [
                (Cardinality::OneOrMany, Cardinality::ZeroOrOne),
                (Cardinality::ZeroOrOne, Cardinality::OneOrMany),
                (Cardinality::One, Cardinality::ZeroOrMany),
            ]
        );
    }

    #[test]
    fn test_dangling_relations_are_kept() {
        let (document, _) = parse("Ghost 1--1 Phantom");
        assert!(document.entities().is_empty());
        assert_eq!(document.relations().len(), 1);
    }

    #[test]
    fn test_malformed_relation_is_reported() {
        let (document, diagnostics) = parse("User 1 -- * Order");
        assert!(document.relations().is_empty());
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W001]);
    }

    #[test]
    fn test_relations_before_header_in_same_block() {
        let (document, _) = parse("A 1--* B\n[B]\nid");
        assert_eq!(document.relations().len(), 1);
        assert_eq!(entity_names(&document), ["B"]);
    }
}

#[cfg(test)]
mod title_tests {
    use super::*;

    #[test]
    fn test_title() {
        let (document, _) = parse("Title: Online Shop");
        assert_eq!(document.title(), Some("Online Shop"));
    }

    #[test]
    fn test_last_title_wins() {
        let (document, _) = parse("Title: First\n\n[A]\n\nTitle: Second");
        assert_eq!(document.title(), Some("Second"));
    }

    #[test]
    fn test_title_inside_entity_block_is_not_attribute() {
        let (document, _) = parse("[A]\nid\nTitle: Inside");
        assert_eq!(document.title(), Some("Inside"));
        assert_eq!(document.entities()[0].attributes().len(), 1);
    }

    #[test]
    fn test_empty_title_is_ignored() {
        let (document, diagnostics) = parse("Title: First\n\nTitle:   ");
        assert_eq!(document.title(), Some("First"));
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W003]);
    }

    #[test]
    fn test_no_title() {
        let (document, _) = parse("[A]");
        assert_eq!(document.title(), None);
    }
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let (document, diagnostics) = parse("");
        assert_eq!(document, Document::default());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_complete_document_keeps_block_order() {
        let source = r##"
Title: Shop

[User] {"color": "#ffffff"}
*id
name
# registered customers

User 1--* Order

[Order]
*id
+user_id

Order 1--+ Line Item
"##;
        let (document, diagnostics) = parse(source);

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(document.title(), Some("Shop"));
        assert_eq!(entity_names(&document), ["User", "Order"]);

        let relations: Vec<_> = document
            .relations()
            .iter()
            .map(|r| (r.from_entity(), r.to_entity()))
            .collect();
        assert_eq!(relations, [("User", "Order"), ("Order", "Line Item")]);
    }

    #[test]
    fn test_unrecognized_lines_are_dropped_and_reported() {
        let source = "just some prose\n\n[User]\nid\n\n-- dashes --";
        let (document, diagnostics) = parse(source);

        assert_eq!(entity_names(&document), ["User"]);
        assert!(document.relations().is_empty());
        assert_eq!(codes(&diagnostics), [DiagnosticCode::W001, DiagnosticCode::W001]);

        let span = diagnostics[1].primary_span().unwrap();
        assert_eq!(&source[span.start()..span.end()], "-- dashes --");
    }

    #[test]
    fn test_parse_is_repeatable() {
        let source = "[A]\nx\n\nA 1--1 B";
        let parser = Parser::default();

        let first = parser.parse(source);
        let second = parser.parse(source);
        assert_eq!(first.document(), second.document());
    }
}
