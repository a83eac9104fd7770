use minilearners::prelude::*;

use std::collections::BTreeMap;
use std::io::BufReader;

/// The fish survey.
/// Growing a tree over these five answers must yield:
///
/// ```text
///          no surfacing?
///         ______|_____
///        /0          |1
///     [no]        flippers?
///               _____|_____
///              /0          |1
///           [no]         [yes]
/// ```
fn fish_sample() -> Sample {
    let csv = "no surfacing,flippers,class\n\
               1,1,yes\n\
               1,1,yes\n\
               1,0,no\n\
               0,1,no\n\
               0,1,no";
    Sample::from_reader(BufReader::new(csv.as_bytes()), true)
        .unwrap()
        .set_target("class")
        .unwrap()
}

/// Twenty-four contact-lens fittings.
/// Columns: age, prescript, astigmatic, tear rate; the label says which
/// lens type, if any, the patient was fitted with.
fn lens_sample() -> Sample {
    let rows = [
        ["young", "myope", "no", "reduced", "no lenses"],
        ["young", "myope", "no", "normal", "soft"],
        ["young", "myope", "yes", "reduced", "no lenses"],
        ["young", "myope", "yes", "normal", "hard"],
        ["young", "hyper", "no", "reduced", "no lenses"],
        ["young", "hyper", "no", "normal", "soft"],
        ["young", "hyper", "yes", "reduced", "no lenses"],
        ["young", "hyper", "yes", "normal", "hard"],
        ["pre", "myope", "no", "reduced", "no lenses"],
        ["pre", "myope", "no", "normal", "soft"],
        ["pre", "myope", "yes", "reduced", "no lenses"],
        ["pre", "myope", "yes", "normal", "hard"],
        ["pre", "hyper", "no", "reduced", "no lenses"],
        ["pre", "hyper", "no", "normal", "soft"],
        ["pre", "hyper", "yes", "reduced", "no lenses"],
        ["pre", "hyper", "yes", "normal", "no lenses"],
        ["presbyopic", "myope", "no", "reduced", "no lenses"],
        ["presbyopic", "myope", "no", "normal", "no lenses"],
        ["presbyopic", "myope", "yes", "reduced", "no lenses"],
        ["presbyopic", "myope", "yes", "normal", "hard"],
        ["presbyopic", "hyper", "no", "reduced", "no lenses"],
        ["presbyopic", "hyper", "no", "normal", "soft"],
        ["presbyopic", "hyper", "yes", "reduced", "no lenses"],
        ["presbyopic", "hyper", "yes", "normal", "no lenses"],
    ];
    let rows = rows.iter()
        .map(|row| row.iter().map(Category::new).collect())
        .collect();
    Sample::from_rows(&["age", "prescript", "astigmatic", "tear rate"], rows)
        .unwrap()
}

fn query(values: &[&str]) -> Vec<Category> {
    values.iter().map(Category::new).collect()
}

#[test]
fn fish_survey_grows_the_expected_tree() {
    let sample = fish_sample();
    let f = DecisionTree::new().fit(&sample);

    let expected = Node::branch("no surfacing", BTreeMap::from([
        (Category::new(0), Node::leaf("no")),
        (Category::new(1), Node::branch("flippers", BTreeMap::from([
            (Category::new(0), Node::leaf("no")),
            (Category::new(1), Node::leaf("yes")),
        ]))),
    ]));
    assert_eq!(&expected, f.root());
    assert_eq!(3, f.leaves());
    assert_eq!(2, f.depth());

    let expected = "{no surfacing: {0: no, 1: {flippers: {0: no, 1: yes}}}}";
    let result = f.root().to_string();
    assert_eq!(expected, result, "expected {expected}, got {result}.");
}

#[test]
fn fish_survey_classifies_queries() {
    let f = DecisionTree::new().fit(&fish_sample());

    let cases = [
        (query(&["1", "0"]), Label::from("no")),
        (query(&["1", "1"]), Label::from("yes")),
        (query(&["0", "0"]), Label::from("no")),
        (query(&["0", "1"]), Label::from("no")),
    ];
    for (q, expected) in cases {
        let result = f.predict(&q[..]).unwrap();
        assert_eq!(expected, result, "expected {expected}, got {result}.");
    }
}

#[test]
fn csv_files_read_through_the_reader_builder() {
    let path = std::env::temp_dir().join("minilearners_fish_survey.csv");
    std::fs::write(
        &path,
        "no surfacing,flippers,class\n1,1,yes\n1,1,yes\n1,0,no\n0,1,no\n0,1,no",
    ).unwrap();

    let named = SampleReader::default()
        .file(path.clone())
        .has_header(true)
        .target_feature("class")
        .read()
        .unwrap();

    // Without a named target, the last column holds the class labels.
    let defaulted = SampleReader::<_, &str>::default()
        .file(path.clone())
        .has_header(true)
        .read()
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(fish_sample(), named);
    assert_eq!(named, defaulted);

    let f = DecisionTree::new().fit(&named);
    assert_eq!(3, f.leaves());
}

#[test]
fn verbose_training_reports_and_still_fits() {
    let f = DecisionTree::new().verbose(true).fit(&fish_sample());
    assert_eq!(3, f.leaves());
    assert_eq!(2, f.depth());
}

#[test]
fn lens_fittings_grow_the_expected_tree() {
    let sample = lens_sample();
    let f = DecisionTree::new().fit(&sample);

    let presbyopic_no_astigma = Node::branch("prescript", BTreeMap::from([
        (Category::new("hyper"), Node::leaf("soft")),
        (Category::new("myope"), Node::leaf("no lenses")),
    ]));
    let no_astigma = Node::branch("age", BTreeMap::from([
        (Category::new("pre"), Node::leaf("soft")),
        (Category::new("presbyopic"), presbyopic_no_astigma),
        (Category::new("young"), Node::leaf("soft")),
    ]));

    let hyper_astigma = Node::branch("age", BTreeMap::from([
        (Category::new("pre"), Node::leaf("no lenses")),
        (Category::new("presbyopic"), Node::leaf("no lenses")),
        (Category::new("young"), Node::leaf("hard")),
    ]));
    let astigma = Node::branch("prescript", BTreeMap::from([
        (Category::new("hyper"), hyper_astigma),
        (Category::new("myope"), Node::leaf("hard")),
    ]));

    let expected = Node::branch("tear rate", BTreeMap::from([
        (Category::new("normal"), Node::branch("astigmatic", BTreeMap::from([
            (Category::new("no"), no_astigma),
            (Category::new("yes"), astigma),
        ]))),
        (Category::new("reduced"), Node::leaf("no lenses")),
    ]));

    assert_eq!(&expected, f.root());
    assert_eq!(9, f.leaves());
    assert_eq!(4, f.depth());
}

#[test]
fn lens_fittings_classify_their_own_rows() {
    let sample = lens_sample();
    let f = DecisionTree::new().fit(&sample);

    let (n_sample, _) = sample.shape();
    for i in 0..n_sample {
        let (q, expected) = sample.at(i);
        let result = f.predict(q).unwrap();
        assert_eq!(
            &result, expected,
            "row {i}: expected {expected}, got {result}.",
        );
    }
}

#[test]
fn unseen_feature_value_is_reported() {
    let f = DecisionTree::new().fit(&lens_sample());

    let q = query(&["young", "myope", "yes", "dry"]);
    let result = f.predict(&q[..]);
    assert!(matches!(
        result,
        Err(Error::UnseenValue { feature, value })
            if feature == "tear rate" && value == Category::new("dry"),
    ));
}

#[test]
fn row_order_never_changes_the_tree() {
    use rand::prelude::*;

    let sample = lens_sample();
    let expected = DecisionTree::new().fit(&sample);

    let (n_sample, _) = sample.shape();
    let mut order = (0..n_sample).collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..5 {
        order.shuffle(&mut rng);

        let rows = order.iter()
            .map(|&i| {
                let (cells, label) = sample.at(i);
                let mut row = cells.to_vec();
                row.push(Category::new(label));
                row
            })
            .collect();
        let shuffled = Sample::from_rows(
            &["age", "prescript", "astigmatic", "tear rate"],
            rows,
        ).unwrap();

        let result = DecisionTree::new().fit(&shuffled);
        assert_eq!(expected, result);
    }
}

/// An independent work-list traversal of the nested structure,
/// counting terminal nodes and the deepest level a terminal sits on.
fn flattened_metrics(root: &Node) -> (usize, usize) {
    let mut leaves = 0;
    let mut depth = 0;

    let mut pending = vec![(root, 0)];
    while let Some((node, level)) = pending.pop() {
        match node {
            Node::Branch { children, .. } => {
                for child in children.values() {
                    pending.push((child, level + 1));
                }
            },
            Node::Leaf { .. } => {
                leaves += 1;
                depth = depth.max(level);
            },
        }
    }
    (leaves, depth)
}

#[test]
fn tree_metrics_agree_with_independent_flattening() {
    let fitted = [
        DecisionTree::new().fit(&fish_sample()),
        DecisionTree::new().fit(&lens_sample()),
    ];
    for f in fitted {
        let (leaves, depth) = flattened_metrics(f.root());
        assert_eq!(f.leaves(), leaves, "expected {}, got {leaves}.", f.leaves());
        assert_eq!(f.depth(), depth, "expected {}, got {depth}.", f.depth());
    }
}

#[test]
fn fitted_trees_survive_serialization() {
    let f = DecisionTree::new().fit(&fish_sample());

    let json = serde_json::to_string(&f).unwrap();
    let reloaded: DecisionTreeClassifier = serde_json::from_str(&json).unwrap();
    assert_eq!(f, reloaded);

    let q = query(&["1", "1"]);
    let expected = Label::from("yes");
    let result = reloaded.predict(&q[..]).unwrap();
    assert_eq!(expected, result, "expected {expected}, got {result}.");
}

#[test]
fn trees_export_to_graphviz() {
    let f = DecisionTree::new().fit(&fish_sample());

    let path = std::env::temp_dir().join("minilearners_fish_tree.dot");
    f.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.ends_with('}'));
    assert!(dot.contains("node_0 [ label = \"no surfacing ?\" ]"));
    assert!(dot.contains("shape = box"));
}
