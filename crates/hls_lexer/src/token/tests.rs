use super::*;

fn stream_inf<'a>() -> Token<'a> {
    let mut attributes = AttributeMap::default();
    attributes.insert("BANDWIDTH", "246440");
    attributes.insert(URI, "low/index.m3u8");
    Token::TagWithAttributes {
        name: "#EXT-X-STREAM-INF",
        pos: 8,
        attributes,
    }
}

#[test]
fn name_only_for_tags() {
    assert_eq!(
        Token::Tag {
            name: "#EXTM3U",
            pos: 0
        }
        .name(),
        Some("#EXTM3U")
    );
    assert_eq!(stream_inf().name(), Some("#EXT-X-STREAM-INF"));
    assert_eq!(Token::Uri { value: "a.ts", pos: 3 }.name(), None);
    assert_eq!(Token::Comment { text: "# c", pos: 0 }.name(), None);
}

#[test]
fn pos_for_every_variant() {
    assert_eq!(Token::Tag { name: "#EXTM3U", pos: 0 }.pos(), 0);
    assert_eq!(stream_inf().pos(), 8);
    assert_eq!(Token::Uri { value: "a.ts", pos: 3 }.pos(), 3);
    assert_eq!(Token::Comment { text: "#", pos: 9 }.pos(), 9);
}

#[test]
fn attribute_lookup() {
    let token = stream_inf();
    assert_eq!(token.attribute("BANDWIDTH"), Some("246440"));
    assert_eq!(token.attribute(URI), Some("low/index.m3u8"));
    assert_eq!(token.attribute("CODECS"), None);
    assert_eq!(token.attributes().map(AttributeMap::len), Some(2));
}

#[test]
fn attribute_lookup_on_bare_tag_is_none() {
    let token = Token::Tag {
        name: "#EXT-X-ENDLIST",
        pos: 0,
    };
    assert!(token.attributes().is_none());
    assert_eq!(token.attribute(DURATION), None);
}

#[test]
fn attribute_map_last_write_wins() {
    let mut attributes = AttributeMap::default();
    attributes.insert("NAME", "first");
    attributes.insert("NAME", "second");
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes.get("NAME"), Some(&"second"));
}
