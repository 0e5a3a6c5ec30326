/*
  White lists of sampleable entity types and relevant predicates.
  Bundled as plain data and handed to the loader and samplers
  explicitly, so nothing reaches for module-level globals.
*/

use std::collections::HashSet;

pub const TYPE_PREDICATE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";

/* Full bracketed form of a dblp schema predicate */
pub fn dblp_schema(name: &str) -> String {
  format!("<https://dblp.org/rdf/schema#{}>", name)
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
  /* rdf:type local names that classify a subject as a publication */
  pub publications: HashSet<String>,
  /* rdf:type local names that classify a subject as a creator */
  pub creators: HashSet<String>,
  /* predicates worth indexing at all; everything else is dropped at
     load time to bound memory */
  pub predicates: HashSet<String>,
  /* predicates whose objects are themselves expandable entities, as
     opposed to terminal literals like a year or a doi */
  pub nonleaf_predicates: HashSet<String>,
}

impl Default for Vocabulary {
  fn default() -> Self {
    let publications = [
      "Book",
      "Inproceedings",
      "Publication",
      "Article",
      "Incollection",
      "Editorship",
      "Reference",
      "Data",
      "Informal",
      "Withdrawn",
    ].iter().map(|s| s.to_string()).collect();

    let creators = [
      "Person",
      "AmbiguousCreator",
      "Group",
      "Editor",
      "Creator",
    ].iter().map(|s| s.to_string()).collect();

    let predicates = [
      // Creator related predicates
      "creatorOf",
      "authorOf",
      "authorBy",
      "editorOf",
      "numberOfCreators",
      "coCreatorWith",
      "coAuthorWith",
      "coEditorWith",
      "affiliation",
      "primaryAffiliation",
      "otherAffiliation",
      "fullCreatorName",
      "primaryFullCreatorName",
      "otherFullCreatorName",
      "possibleActualCreator",
      "proxyAmbiguousCreator",
      "orcid",
      "wikidata",
      "webpage",

      // Publication related predicates
      "createdBy",
      "authoredBy",
      "editedBy",
      "publishedIn",
      "publishedBy",
      "yearOfPublication",
      "yearOfEvent",
      "doi",
      "title",
      "bibtexType",
    ].iter().map(|s| dblp_schema(s)).collect();

    let nonleaf_predicates = [
      "creatorOf",
      "authorOf",
      "editorOf",
      "coCreatorWith",
      "coAuthorWith",
      "coEditorWith",
      "possibleActualCreator",
      "proxyAmbiguousCreator",
      "createdBy",
      "authoredBy",
      "editedBy",
    ].iter().map(|s| dblp_schema(s)).collect();

    Vocabulary {
      publications,
      creators,
      predicates,
      nonleaf_predicates,
    }
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  #[test]
  fn dblp_schema_builds_bracketed_uris() {
    assert_eq!(dblp_schema("title"), "<https://dblp.org/rdf/schema#title>");
  }
  #[test]
  fn nonleaf_predicates_are_a_subset_of_relevant_ones() {
    let vocab = Vocabulary::default();
    assert!(vocab.nonleaf_predicates.is_subset(&vocab.predicates));
    assert!(vocab.nonleaf_predicates.contains(&dblp_schema("authoredBy")));
    assert!(!vocab.nonleaf_predicates.contains(&dblp_schema("yearOfPublication")));
  }
}
