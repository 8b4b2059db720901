//! Query documents used by the parser benchmarks.

pub const SIMPLE_QUERY: &str = "{ student(id: 1) { id name score } }";

pub const ROSTER_QUERY: &str = r#"
query Roster($id: Int!, $minimum: Float = 2.5) {
  first: student(id: $id) {
    id
    name
    des
    score
    nationalid
  }
  everyone: list {
    id
    name
    score
  }
}
"#;

pub const MUTATION_BATCH: &str = r#"
mutation Enroll {
  ada: enroll(name: "Ada", des: "first programmer", score: 9.5, nationalid: "ada-1815") { id }
  alan: enroll(name: "Alan", score: 9) { id name }
  grace: enroll(name: "Grace", des: """
    Rear admiral
    and compiler author
  """) { id des }
}
mutation Cleanup {
  update(id: 1, name: "Ada Lovelace") { id name }
  leave(id: 2) { id }
}
"#;

/// A document with many errors, to measure the recovery path.
pub const BROKEN_QUERY: &str = r#"
{
  student(id 1) { name }
  list( { id }
  enroll(name: "unterminated) { id }
  ...Fragment
  leave(id: 99999999999) @skip { id }
}
"#;
