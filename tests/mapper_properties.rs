mod common;

use bdui::action::{ActionDispatcher, ChannelActionHandler, HostEvent};
use bdui::mapper::ElementMapper;
use bdui::render::props::{ButtonStyle, LabelStyle, StackAlignment};
use bdui::render::tokens::{Spacing, Typography};
use bdui::render::{Color, EdgeInsets, RenderKind, TriggerKind};
use bdui::schema::{decode_str, ElementNode, ElementStyles, ElementType};
use common::{element_ids, id_of, label_text, SCREEN};

#[test]
fn decoded_label_maps_to_headline_label() {
    let node = decode_str(r#"{"type":"label","content":{"text":"Hello","style":"headline"}}"#)
        .unwrap();
    let tree = ElementMapper::new().map(&node).unwrap();

    let root = tree.root().unwrap();
    let RenderKind::Label(props) = &tree.get(root).unwrap().kind else {
        panic!("expected a label");
    };
    assert_eq!(props.text, "Hello");
    assert_eq!(props.style, LabelStyle::Headline);
    assert_eq!(props.font, Typography::HEADLINE);
    assert!(tree.children(root).is_empty());
    assert_eq!(tree.trigger_count(), 0);
}

#[test]
fn empty_button_uses_documented_defaults() {
    let node = decode_str(r#"{"type":"button","content":{}}"#).unwrap();
    let tree = ElementMapper::new().map(&node).unwrap();

    let RenderKind::Button(props) = &tree.root_node().unwrap().kind else {
        panic!("expected a button");
    };
    assert_eq!(props.style, ButtonStyle::Primary);
    assert!(props.enabled);
    assert_eq!(props.title, "Button");
}

#[test]
fn container_child_count_matches_mappable_subviews() {
    let deep_stack = |levels: usize| {
        let mut node = ElementNode::new(ElementType::Label);
        for _ in 0..levels {
            node = ElementNode::new(ElementType::StackView).with_subview(node);
        }
        node
    };
    // The deep chain loses its descendants past the limit, but the child
    // itself still maps and is counted.
    let root = ElementNode::new(ElementType::StackView)
        .with_subview(ElementNode::new(ElementType::Label))
        .with_subview(ElementNode::new(ElementType::Button))
        .with_subview(deep_stack(5))
        .with_subview(ElementNode::new(ElementType::Card));

    let tree = ElementMapper::with_max_depth(3).map(&root).unwrap();
    assert_eq!(tree.children(tree.root().unwrap()).len(), 4);

    let shallow = ElementMapper::with_max_depth(0).map(&root).unwrap();
    assert!(shallow.children(shallow.root().unwrap()).is_empty());
}

#[test]
fn mapping_twice_yields_equal_independent_trees() {
    let node = decode_str(SCREEN).unwrap();
    let mapper = ElementMapper::new();

    let first = mapper.map(&node).unwrap();
    let mut second = mapper.map(&node).unwrap();
    assert_eq!(first, second);

    let dispatcher = bdui::action::ActionDispatcher::new(bdui::action::LoggingActionHandler);
    let input = id_of(&second, "nameInput");
    second.change_text(input, "changed", &dispatcher);
    assert_ne!(first, second);
    match &first.get(id_of(&first, "nameInput")).unwrap().kind {
        RenderKind::TextInput(props) => assert_eq!(props.text, ""),
        other => panic!("unexpected {}", other.name()),
    }
}

#[test]
fn style_declaration_order_does_not_matter() {
    let forward = decode_str(
        r##"{"type":"card","styles":{"backgroundColor":"#336699","cornerRadius":"large"}}"##,
    )
    .unwrap();
    let reverse = decode_str(
        r##"{"type":"card","styles":{"cornerRadius":"large","backgroundColor":"#336699"}}"##,
    )
    .unwrap();

    let mapper = ElementMapper::new();
    let a = mapper.map(&forward).unwrap();
    let b = mapper.map(&reverse).unwrap();
    assert_eq!(a, b);

    let style = a.root_node().unwrap().style;
    assert_eq!(style.background, Some(Color::rgb(0x33, 0x66, 0x99)));
    assert_eq!(style.corner_radius, Some(16.0));
    assert!(style.clips_to_bounds);
}

#[test]
fn unresolvable_styles_are_ignored() {
    let node = ElementNode::new(ElementType::ContentView).with_styles(ElementStyles {
        background_color: Some("not-a-colour".to_string()),
        corner_radius: Some("enormous".to_string()),
        padding: None,
    });
    let tree = ElementMapper::new().map(&node).unwrap();
    let style = tree.root_node().unwrap().style;
    assert_eq!(style.background, None);
    assert_eq!(style.corner_radius, None);
}

#[test]
fn screen_maps_in_document_order() {
    let tree = ElementMapper::new().map(&decode_str(SCREEN).unwrap()).unwrap();
    assert_eq!(
        element_ids(&tree),
        [
            "rootView",
            "mainStack",
            "titleLabel",
            "nameInput",
            "submitButton",
            "footerCard",
            "refreshButton",
            "detailsButton",
            "closeButton",
        ]
    );
    assert_eq!(label_text(&tree, id_of(&tree, "titleLabel")).as_deref(), Some("Welcome"));

    let stack = tree.get(id_of(&tree, "mainStack")).unwrap();
    let RenderKind::Stack(props) = &stack.kind else {
        panic!("expected a stack");
    };
    assert_eq!(props.spacing, Spacing::LARGE);
    assert_eq!(props.alignment, StackAlignment::Center);

    // The stack sits inside a content view, so its own padding insets it.
    let root = tree.root_node().unwrap();
    assert_eq!(root.children[0].insets, EdgeInsets::uniform(20.0));
    // Cards inset every child, with extra room at the top.
    let card = tree.get(id_of(&tree, "footerCard")).unwrap();
    let card_insets = EdgeInsets {
        top: 24.0,
        left: 16.0,
        bottom: 16.0,
        right: 16.0,
    };
    assert!(card.children.iter().all(|a| a.insets == card_insets));
}

#[test]
fn triggers_follow_declared_actions() {
    let tree = ElementMapper::new().map(&decode_str(SCREEN).unwrap()).unwrap();
    assert_eq!(tree.trigger_count(), 5);
    assert_eq!(
        tree.trigger(id_of(&tree, "nameInput")).unwrap().kind,
        TriggerKind::TextChange
    );
    assert_eq!(
        tree.trigger(id_of(&tree, "submitButton")).unwrap().kind,
        TriggerKind::Tap
    );
    assert!(tree.trigger(id_of(&tree, "titleLabel")).is_none());
}

#[test]
fn duplicate_id_stays_reachable_after_partial_reload() {
    let node = decode_str(
        r#"{"type":"contentView","subviews":[
            {"type":"stackView","id":"group","subviews":[
                {"type":"button","id":"action",
                 "actions":{"tap":{"type":"custom","payload":{"name":"inner"}}}}]},
            {"type":"button","id":"action",
             "actions":{"tap":{"type":"custom","payload":{"name":"outer"}}}}]}"#,
    )
    .unwrap();
    let mapper = ElementMapper::new();
    let mut tree = mapper.map(&node).unwrap();

    let empty_group = ElementNode::new(ElementType::StackView).with_id("group");
    mapper
        .rebuild_subtree(&mut tree, "group", &empty_group)
        .unwrap();

    let (tx, rx) = std::sync::mpsc::channel();
    let dispatcher = ActionDispatcher::new(ChannelActionHandler::new(tx));
    assert!(tree.tap(id_of(&tree, "action"), &dispatcher));
    match rx.try_recv().unwrap() {
        HostEvent::Custom { name, .. } => assert_eq!(name, "outer"),
        other => panic!("unexpected {:?}", other),
    }
}
