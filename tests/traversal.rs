use std::thread;

use field_paths::{merge_field_sets, FieldPath, FieldPathError, FieldSet, FieldType, Record, WellKnown};

const POD: &str = r#"{
    "name": "Pod",
    "fields": [
        { "name": "TypeMeta", "tag": "json:\",inline\"", "ty": "scalar" },
        {
            "name": "ObjectMeta",
            "tag": "json:\"metadata,omitempty\"",
            "ty": { "record": {
                "name": "ObjectMeta",
                "fields": [
                    { "name": "Name", "tag": "json:\"name,omitempty\"", "ty": "scalar" },
                    { "name": "Labels", "tag": "json:\"labels,omitempty\"", "ty": { "repeated": "scalar" } }
                ]
            } }
        },
        {
            "name": "Spec",
            "tag": "json:\"spec,omitempty\"",
            "ty": { "record": {
                "name": "PodSpec",
                "fields": [
                    {
                        "name": "Containers",
                        "tag": "json:\"containers\"",
                        "ty": { "repeated": { "record": {
                            "name": "Container",
                            "fields": [
                                { "name": "Name", "tag": "json:\"name\"", "ty": "scalar" },
                                { "name": "Image", "tag": "json:\"image,omitempty\"", "ty": "scalar" },
                                { "name": "Args", "tag": "json:\"args,omitempty\"", "ty": { "repeated": "scalar" } }
                            ]
                        } } }
                    },
                    { "name": "Matrix", "tag": "json:\"matrix\"", "ty": { "repeated": { "repeated": "scalar" } } }
                ]
            } }
        },
        {
            "name": "Status",
            "tag": "json:\"status,omitempty\"",
            "ty": { "record": {
                "name": "PodStatus",
                "fields": [
                    { "name": "Phase", "tag": "json:\"phase\"", "ty": "scalar" }
                ]
            } }
        }
    ]
}"#;

fn pod() -> Record {
    Record::from_json_str(POD).unwrap()
}

fn walk_record(record: &Record, path: &FieldPath, out: &mut FieldSet) {
    for (index, field) in record.fields.iter().enumerate() {
        let child = path.child(record, index).unwrap();
        out.add(child.clone());
        walk_type(&field.ty, &child, out);
    }
}

fn walk_type(ty: &FieldType, path: &FieldPath, out: &mut FieldSet) {
    match ty {
        FieldType::Scalar => {}
        FieldType::Record(record) => walk_record(record, path, out),
        FieldType::Repeated(element) => {
            let element_path = path.index();
            out.add(element_path.clone());
            walk_type(element, &element_path, out);
        }
    }
}

fn parse(text: &str) -> FieldPath {
    text.split('.').skip(1).fold(FieldPath::root(), |path, part| {
        match part.strip_suffix("[*]") {
            Some(name) => path.join(name).index(),
            None => path.join(part),
        }
    })
}

#[test]
fn sequential_walk_names_every_location() {
    let mut set = FieldSet::new();
    walk_record(&pod(), &FieldPath::root(), &mut set);

    let expected = [
        "root.",
        "root.metadata",
        "root.metadata.name",
        "root.metadata.labels",
        "root.metadata.labels[*]",
        "root.spec",
        "root.spec.containers",
        "root.spec.containers[*]",
        "root.spec.containers[*].name",
        "root.spec.containers[*].image",
        "root.spec.containers[*].args",
        "root.spec.containers[*].args[*]",
        "root.spec.matrix",
        "root.spec.matrix[*]",
        "root.status",
        "root.status.phase",
    ];

    // Nested repeated types add one index segment per level.
    assert_eq!(set.len(), expected.len() + 1);

    for text in expected.iter() {
        assert!(set.contains(&parse(text)), "missing {}", text);
    }
    assert!(set.contains(&FieldPath::root().join("spec").join("matrix").index().index()));
}

#[test]
fn walking_twice_adds_nothing() {
    let record = pod();
    let mut set = FieldSet::new();

    walk_record(&record, &FieldPath::root(), &mut set);
    let before = set.clone();
    walk_record(&record, &FieldPath::root(), &mut set);

    assert_eq!(set, before);
    assert!(!set.add(FieldPath::root().join("spec").join("containers").index()));
}

#[test]
fn parallel_units_merge_to_the_sequential_result() {
    let record = pod();
    let root = FieldPath::root();

    let mut sequential = FieldSet::new();
    walk_record(&record, &root, &mut sequential);

    let units: Vec<FieldSet> = thread::scope(|scope| {
        let handles: Vec<_> = record
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let record = &record;
                let root = &root;
                scope.spawn(move || {
                    let mut unit = FieldSet::new();
                    let child = root.child(record, index).unwrap();
                    unit.add(child.clone());
                    walk_type(&field.ty, &child, &mut unit);
                    unit
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let merged = merge_field_sets(&units);
    let reversed = merge_field_sets(units.iter().rev());

    assert_eq!(merged, sequential);
    assert_eq!(reversed, sequential);
}

#[test]
fn top_level_units_classify() {
    let record = pod();
    let root = FieldPath::root();

    let classes: Vec<Option<WellKnown>> = (0..record.fields.len())
        .map(|index| FieldSet::from(root.child(&record, index).unwrap()).classify())
        .collect();

    assert_eq!(
        classes,
        vec![
            Some(WellKnown::TypeMeta),
            Some(WellKnown::Metadata),
            None,
            Some(WellKnown::Status),
        ]
    );
}

#[test]
fn driver_sees_invalid_indices_as_errors() {
    let record = pod();
    let err = FieldPath::root().child(&record, 7).unwrap_err();

    assert_eq!(
        err,
        FieldPathError::InvalidFieldIndex {
            record: "Pod".to_owned(),
            index: 7,
            count: 4,
        }
    );
    assert_eq!(err.to_string(), "record 'Pod' has 4 field(s); index 7 is out of range");
}
