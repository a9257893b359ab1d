//! End-to-end tests for the docs transform.
//!
//! Trees are written as HAST JSON, the shape a host Markdown pipeline hands
//! over, and run through the public entry points.

use hastform_ast::Root;
use hastform_core::{DocsTransform, TransformConfig, TransformError, TreeTransform, docs_transform};
use serde_json::{Value, json};

const PERMALINK_CLASS: &str =
    "w-4 -ml-5 pl-0.5 sm:pl-0 sm:-ml-6 absolute block group-hover:!text-main !text-zinc-200 shrink-0";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn root_from(value: Value) -> Root {
    serde_json::from_value(value).expect("valid HAST tree")
}

fn run(value: Value) -> Value {
    init_tracing();
    let mut root = root_from(value);
    DocsTransform::new()
        .transform(&mut root)
        .expect("transform succeeds");
    serde_json::to_value(&root).unwrap()
}

fn text(value: &str) -> Value {
    json!({"type": "text", "value": value})
}

fn anchor(id: &str) -> Value {
    json!({
        "type": "element",
        "tagName": "a",
        "properties": {
            "href": format!("#{}", id),
            "class": PERMALINK_CLASS,
            "aria-label": "Permalink"
        },
        "children": [text("#")]
    })
}

mod examples {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_gets_permalink() {
        init_tracing();
        let mut root = root_from(json!({
            "type": "root",
            "children": [
                {"type": "element", "tagName": "h2", "properties": {"id": "intro"}, "children": []}
            ]
        }));

        let transform = docs_transform();
        transform(&mut root).unwrap();

        insta::assert_json_snapshot!(root, @r###"
        {
          "type": "root",
          "children": [
            {
              "type": "element",
              "tagName": "h2",
              "properties": {
                "id": "intro",
                "class": "relative block flex group"
              },
              "children": [
                {
                  "type": "element",
                  "tagName": "a",
                  "properties": {
                    "href": "#intro",
                    "class": "w-4 -ml-5 pl-0.5 sm:pl-0 sm:-ml-6 absolute block group-hover:!text-main !text-zinc-200 shrink-0",
                    "aria-label": "Permalink"
                  },
                  "children": [
                    {
                      "type": "text",
                      "value": "#"
                    }
                  ]
                }
              ]
            }
          ]
        }
        "###);
    }

    #[test]
    fn warn_callout_is_styled() {
        let output = run(json!({
            "type": "root",
            "children": [{
                "type": "element",
                "tagName": "blockquote",
                "properties": {"class": "note"},
                "children": [{
                    "type": "element",
                    "tagName": "p",
                    "children": [text("(warn) be careful")]
                }]
            }]
        }));

        assert_eq!(output["children"][0]["properties"]["class"], "note bg-default bq-warn");
        assert_eq!(
            output["children"][0]["children"][0]["children"][0]["value"],
            " be careful"
        );
    }

    #[test]
    fn root_table_is_wrapped() {
        let table = json!({"type": "element", "tagName": "table", "children": []});
        let paragraph = json!({"type": "element", "tagName": "p", "children": []});

        let output = run(json!({"type": "root", "children": [table.clone(), paragraph.clone()]}));

        assert_eq!(
            output["children"],
            json!([
                {
                    "type": "element",
                    "tagName": "div",
                    "properties": {"class": "table-wrapper"},
                    "children": [table]
                },
                paragraph
            ])
        );
    }
}

mod full_document {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document() -> Value {
        json!({
            "type": "root",
            "children": [
                {"type": "doctype"},
                {"type": "element", "tagName": "h1", "properties": {"id": "guide", "class": "title"}, "children": [text("Guide")]},
                text("\n"),
                {"type": "element", "tagName": "h6", "properties": {"id": "fine-print"}, "children": [text("Fine print")]},
                {"type": "element", "tagName": "h3", "properties": {}, "children": [text("No id")]},
                {"type": "comment", "value": " generated "},
                {
                    "type": "element",
                    "tagName": "blockquote",
                    "properties": {},
                    "children": [
                        text("\n"),
                        {"type": "element", "tagName": "p", "children": [text("(red) Do not run this in production.")]},
                        {"type": "element", "tagName": "table", "children": []}
                    ]
                },
                {
                    "type": "element",
                    "tagName": "blockquote",
                    "children": [
                        {"type": "element", "tagName": "p", "children": [text("(warn) no property map")]}
                    ]
                },
                {"type": "element", "tagName": "table", "properties": {"className": ["data"]}, "children": []}
            ]
        })
    }

    #[test]
    fn applies_every_rule_once() {
        let output = run(document());

        let expected = json!({
            "type": "root",
            "children": [
                {"type": "doctype"},
                {
                    "type": "element",
                    "tagName": "h1",
                    "properties": {"id": "guide", "class": "relative block flex group"},
                    "children": [text("Guide"), anchor("guide")]
                },
                text("\n"),
                {"type": "element", "tagName": "h6", "properties": {"id": "fine-print"}, "children": [text("Fine print")]},
                {"type": "element", "tagName": "h3", "properties": {}, "children": [text("No id")]},
                {"type": "comment", "value": " generated "},
                {
                    "type": "element",
                    "tagName": "blockquote",
                    "properties": {"class": "bg-default bq-red"},
                    "children": [
                        text("\n"),
                        {"type": "element", "tagName": "p", "children": [text(" Do not run this in production.")]},
                        {"type": "element", "tagName": "table", "children": []}
                    ]
                },
                {
                    "type": "element",
                    "tagName": "blockquote",
                    "children": [
                        {"type": "element", "tagName": "p", "children": [text("(warn) no property map")]}
                    ]
                },
                {
                    "type": "element",
                    "tagName": "div",
                    "properties": {"class": "table-wrapper"},
                    "children": [
                        {"type": "element", "tagName": "table", "properties": {"className": ["data"]}, "children": []}
                    ]
                }
            ]
        });

        assert_eq!(output, expected);
    }

    #[test]
    fn second_run_only_repeats_heading_and_callout_rules() {
        init_tracing();
        let mut root = root_from(document());
        let transform = DocsTransform::new();

        transform.transform(&mut root).unwrap();
        let once = serde_json::to_value(&root).unwrap();
        transform.transform(&mut root).unwrap();
        let twice = serde_json::to_value(&root).unwrap();

        // wrapper is not wrapped again
        assert_eq!(twice["children"][8], once["children"][8]);
        // heading gets another anchor
        assert_eq!(twice["children"][1]["children"].as_array().unwrap().len(), 3);
        // callout gets the base class again
        assert_eq!(
            twice["children"][6]["properties"]["class"],
            "bg-default bq-red bg-default"
        );
    }

    #[test]
    fn transform_json_keeps_fields_it_does_not_model() {
        let position = json!({"start": {"line": 3, "column": 1}, "end": {"line": 3, "column": 20}});
        let mdx = json!({
            "type": "mdxJsxFlowElement",
            "name": "Callout",
            "attributes": [{"type": "mdxJsxAttribute", "name": "kind", "value": "info"}],
            "children": []
        });
        let input = json!({
            "type": "root",
            "children": [
                mdx.clone(),
                {"type": "element", "tagName": "h2", "properties": {"id": "a"}, "children": [], "position": position}
            ]
        });

        let output = DocsTransform::new()
            .transform_json(&input.to_string())
            .unwrap();

        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output["children"][0], mdx);
        assert_eq!(output["children"][1]["position"], position);
        assert_eq!(output["children"][1]["children"][0], anchor("a"));
    }

    #[test]
    fn transform_json_round_trip() {
        let input = serde_json::to_string(&document()).unwrap();

        let output = DocsTransform::new().transform_json(&input).unwrap();

        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output, run(document()));
    }
}

mod configuration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_file_drives_classes() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hastform.jsonc");
        std::fs::write(
            &path,
            r#"{
                // theme overrides
                "headingClass": "heading",
                "tableWrapperClass": "scroll",
            }"#,
        )
        .unwrap();

        let transform = DocsTransform::with_config(TransformConfig::from_file(&path).unwrap());
        let mut root = root_from(json!({
            "type": "root",
            "children": [
                {"type": "element", "tagName": "h2", "properties": {"id": "a"}, "children": []},
                {"type": "element", "tagName": "table", "children": []}
            ]
        }));

        transform.transform(&mut root).unwrap();
        let output = serde_json::to_value(&root).unwrap();

        assert_eq!(output["children"][0]["properties"]["class"], "heading");
        assert_eq!(output["children"][1]["properties"]["class"], "scroll");
    }

    #[test]
    fn strict_callouts_fail_the_document() {
        init_tracing();
        let transform = DocsTransform::with_config(
            TransformConfig::from_json(r#"{ "strictCallouts": true }"#).unwrap(),
        );
        let mut root = root_from(json!({
            "type": "root",
            "children": [{
                "type": "element",
                "tagName": "blockquote",
                "properties": {},
                "children": [{
                    "type": "element",
                    "tagName": "p",
                    "children": [{"type": "element", "tagName": "img", "properties": {"src": "x.png"}, "children": []}]
                }]
            }]
        }));

        let err = transform.transform(&mut root).unwrap_err();

        assert!(matches!(err, TransformError::MissingLeadText { index: 0 }));
        assert_eq!(
            err.to_string(),
            "Callout paragraph at blockquote child 0 has no leading text"
        );
    }

    #[test]
    fn lenient_callouts_skip_the_blockquote() {
        let input = json!({
            "type": "root",
            "children": [{
                "type": "element",
                "tagName": "blockquote",
                "properties": {"class": "note"},
                "children": [{"type": "element", "tagName": "p", "children": []}]
            }]
        });

        assert_eq!(run(input.clone()), input);
    }
}

mod threading {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_transform_serves_many_threads() {
        let transform = DocsTransform::new();

        std::thread::scope(|scope| {
            for i in 0..4 {
                let transform = &transform;
                scope.spawn(move || {
                    let id = format!("section-{}", i);
                    let mut root = root_from(json!({
                        "type": "root",
                        "children": [{"type": "element", "tagName": "h2", "properties": {"id": id.clone()}, "children": []}]
                    }));

                    transform.transform(&mut root).unwrap();

                    let output = serde_json::to_value(&root).unwrap();
                    assert_eq!(output["children"][0]["children"][0], anchor(&id));
                });
            }
        });
    }
}
