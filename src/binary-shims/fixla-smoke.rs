extern crate fixla_tasks;

fn main() { fixla_tasks::entry_points::smoke(); }
