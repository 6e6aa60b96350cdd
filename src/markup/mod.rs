/*!
 * Conversion between marker text and tag-preserving XML.
 *
 * Marker text is the inline rich-text markup used by the game UI:
 *
 * - `{tag}` ... `{/tag}` paired effect tags, optionally with `key=value`
 *   parameters (`{color value=red}`)
 * - `%{name}` variable references substituted at runtime
 * - `{{` for a literal `{`, and `}}` for a literal `}` inside a tag region
 *
 * Translation services that support XML tag handling leave tags alone and
 * only translate the text between them, so each string is encoded to XML
 * before it is sent and decoded back to marker text afterwards:
 *
 * - `encoder`: marker text -> XML (`markup_to_xml`)
 * - `decoder`: XML -> marker text (`xml_to_markup`)
 * - `stack`: the open-tag stack both directions close tags against
 * - `tag`: attribute and variable-element grammar shared by both directions
 * - `escape`: text escaping for each side
 */

pub mod decoder;
pub mod encoder;
pub mod escape;
pub mod stack;
pub mod tag;

pub use self::decoder::{XmlDecoder, XmlScanner, XmlToken, xml_to_markup};
pub use self::encoder::{Encoded, MarkupEncoder, MarkupScanner, MarkupToken, markup_to_xml};
pub use self::stack::OpenTagStack;
pub use self::tag::Attribute;
