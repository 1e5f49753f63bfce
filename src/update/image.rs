//! Image insertion, attribute and upload handlers

use crate::commands::Cmd;
use crate::messages::ImageMsg;
use crate::model::{EditCommand, EditorModel, NodeType};
use crate::schema::AttrValue;
use crate::toolbar::insert_images;

use super::run_edit;

fn set_image_attr(key: &str, value: AttrValue) -> EditCommand {
    EditCommand::UpdateAttributes {
        node: NodeType::Image,
        attrs: vec![(key.to_string(), value)],
    }
}

/// Handle image messages
pub fn update_image(model: &mut EditorModel, msg: ImageMsg) -> Option<Cmd> {
    match msg {
        ImageMsg::Insert(options) => run_edit(model, EditCommand::SetImage(options)),

        ImageMsg::SetAlign(align) => {
            run_edit(model, set_image_attr("align", AttrValue::from(align.as_str())))
        }
        ImageMsg::SetWidth(width) => {
            run_edit(model, set_image_attr("width", AttrValue::from(width.as_str())))
        }
        ImageMsg::SetAlt(alt) => run_edit(model, set_image_attr("alt", AttrValue::from(alt.as_str()))),
        ImageMsg::SetTitle(title) => {
            run_edit(model, set_image_attr("title", AttrValue::from(title.as_str())))
        }

        ImageMsg::Upload(paths) => {
            if paths.is_empty() {
                return None;
            }
            Some(Cmd::UploadImages { paths })
        }

        ImageMsg::Uploaded(Ok(urls)) => {
            let inserted = insert_images(&mut model.document, &urls);
            tracing::info!(inserted, "inserted uploaded images");
            (inserted > 0).then_some(Cmd::Redraw)
        }

        ImageMsg::Uploaded(Err(error)) => {
            tracing::warn!("Image upload failed: {}", error);
            None
        }
    }
}
