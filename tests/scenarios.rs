//! End-to-end scenarios, one per case in spec.md §8.
//!
//! Grounded on `litho-codegen`'s own `tests/` layout (one fixture schema in,
//! one expected-output string out), adapted to this crate's
//! `(name, text)`-sequence return shape.

use gql_client_codegen::{write, Configuration};
use graphql_parser::schema::{parse_schema, Document};
use pretty_assertions::assert_eq;
use unindent::unindent;

fn parse(sdl: &str) -> Document<'static, String> {
    parse_schema::<String>(sdl).unwrap().into_static()
}

#[test]
fn simple_object() {
    let document = parse("type Character { name: String! nicknames: [String!]! }");
    let files = write(&document, &Configuration::default()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "Client");
    let source = &files[0].1;

    assert!(source.contains("type Character"));
    assert!(source.contains("object Character"));
    assert!(source.contains("def name: SelectionBuilder[Character, String] = Field(\"name\", Scalar())"));
    assert!(source.contains(
        "def nicknames: SelectionBuilder[Character, List[String]] = Field(\"nicknames\", ListOf(Scalar()))"
    ));
}

#[test]
fn reserved_field_name_is_backtick_quoted_but_keeps_its_wire_string() {
    let document = parse("type Character { type: String! }");
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("def `type`: SelectionBuilder[Character, String] = Field(\"type\", Scalar())"));
}

#[test]
fn schema_root_aliasing() {
    let document = parse(&unindent(
        "
        schema { query: Q }
        type Q { characters: [Character!]! }
        type Character { name: String! }
        ",
    ));
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("type Q = RootQuery"));
    assert!(source.contains(
        "def characters[A](innerSelection: SelectionBuilder[Character, A]): SelectionBuilder[RootQuery, List[A]] =\n  Field(\"characters\", ListOf(Obj(innerSelection)))"
    ));
}

#[test]
fn scalar_mapping_suppresses_the_declaration_and_substitutes_everywhere() {
    let document = parse(&unindent(
        "
        scalar OffsetDateTime
        type Event { startsAt: OffsetDateTime! }
        ",
    ));
    let config = Configuration::new().with_scalar_mapping("OffsetDateTime", "java.time.OffsetDateTime");
    let files = write(&document, &config).unwrap();
    let source = &files[0].1;

    assert!(!source.contains("type OffsetDateTime ="));
    assert!(source.contains(
        "def startsAt: SelectionBuilder[Event, java.time.OffsetDateTime] = Field(\"startsAt\", Scalar())"
    ));
}

#[test]
fn extensible_enum_gains_an_unknown_variant_ordered_after_the_known_values() {
    let document = parse("enum Origin { EARTH MARS BELT }");
    let config = Configuration::new().with_extensible_enums(true);
    let files = write(&document, &config).unwrap();
    let source = &files[0].1;

    let unknown_case = source.find("final case class __Unknown(value: String) extends Origin").unwrap();
    let belt_case = source.find("case object BELT extends Origin").unwrap();
    assert!(belt_case < unknown_case);

    assert!(source.contains("case __Value.__StringValue(other) => Right(Origin.__Unknown(other))"));
    assert!(source.contains("case Origin.__Unknown(value) => __Value.__EnumValue(value)"));
}

#[test]
fn case_insensitive_duplicate_enum_values_get_suffixed_but_keep_their_wire_string() {
    let document = parse("enum Episode { NEWHOPE EMPIRE JEDI jedi }");
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("case object NEWHOPE extends Episode"));
    assert!(source.contains("case object EMPIRE extends Episode"));
    assert!(source.contains("case object JEDI extends Episode"));
    assert!(source.contains("case object jedi_1 extends Episode"));
    assert!(source.contains("case __Value.__StringValue(\"jedi\") => Right(Episode.jedi_1)"));
    assert!(source.contains("case Episode.jedi_1 => __Value.__EnumValue(\"jedi\")"));
}

#[test]
fn split_files_returns_package_then_each_declaration_alphabetically() {
    let document = parse(&unindent(
        "
        schema { query: Q }
        type Q { characters: [Character!]! }
        type Character { name: String! }
        ",
    ));
    let config = Configuration::new().with_split_files(true).with_package_name("test");
    let files = write(&document, &config).unwrap();

    let names: Vec<&str> = files.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["package", "Character", "Q"]);

    let package_file = &files[0].1;
    assert!(package_file.starts_with("import caliban.client._\n\npackage object test {"));
    assert!(package_file.contains("type Character"));
    assert!(package_file.contains("type Q = RootQuery"));

    let character_file = &files[1].1;
    assert!(character_file.starts_with("package test\n"));
    assert!(character_file.contains("object Character {"));

    let q_file = &files[2].1;
    assert!(q_file.starts_with("package test\n"));
    assert!(q_file.contains("object Q {"));
}

#[test]
fn generation_is_deterministic_across_repeated_calls() {
    let document = parse(&unindent(
        "
        type Query {
          character(id: ID!): Character
        }
        type Character {
          name: String!
        }
        ",
    ));
    let config = Configuration::default();
    assert_eq!(write(&document, &config).unwrap(), write(&document, &config).unwrap());
}

#[test]
fn union_field_emits_exhaustive_and_optional_accessors() {
    let document = parse(&unindent(
        "
        type Query { search: SearchResult! }
        union SearchResult = Human | Droid
        type Human { name: String! }
        type Droid { model: String! }
        ",
    ));
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("onHuman: SelectionBuilder[Human, A]"));
    assert!(source.contains("onDroid: SelectionBuilder[Droid, A]"));
    assert!(source.contains("ChoiceOf(Map(\"Human\" -> Obj(onHuman), \"Droid\" -> Obj(onDroid)))"));
    assert!(source.contains("def searchOption[A]"));
    assert!(source.contains("onHuman: Option[SelectionBuilder[Human, A]] = None"));
}

#[test]
fn interface_field_emits_exhaustive_optional_and_common_accessors() {
    let document = parse(&unindent(
        "
        type Query { hero: Hero! }
        interface Hero { name: String! }
        type Human implements Hero { name: String! homePlanet: String }
        type Droid implements Hero { name: String! primaryFunction: String }
        ",
    ));
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("def hero[A]"));
    assert!(source.contains("def heroOption[A]"));
    assert!(source.contains("def heroInterface[A](interfaceSelection: SelectionBuilder[Hero, A])"));
    assert!(source.contains("object Hero {"));
}

#[test]
fn interface_with_no_implementors_emits_only_the_common_accessor() {
    let document = parse(&unindent(
        "
        type Query { node: Node! }
        interface Node { id: ID! }
        ",
    ));
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("def nodeInterface[A](interfaceSelection: SelectionBuilder[Node, A])"));
    assert!(!source.contains("def node[A]("));
}

#[test]
fn input_object_round_trips_field_order_into_its_encoder() {
    let document = parse(&unindent(
        "
        type Query { search(filter: SearchFilter!): String }
        input SearchFilter {
          term: String!
          limit: Int
          tags: [String!]!
        }
        ",
    ));
    let files = write(&document, &Configuration::default()).unwrap();
    let source = &files[0].1;

    assert!(source.contains("final case class SearchFilter("));
    assert!(source.contains("term: String,"));
    assert!(source.contains("limit: Option[Int] = None,"));
    assert!(source.contains("tags: List[String] = Nil"));

    let term_idx = source.find("\"term\" ->").unwrap();
    let limit_idx = source.find("\"limit\" ->").unwrap();
    let tags_idx = source.find("\"tags\" ->").unwrap();
    assert!(term_idx < limit_idx);
    assert!(limit_idx < tags_idx);
}
