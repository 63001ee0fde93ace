use super::tree::{Cell, Element, Image, Stack, TableRow, Text, Widget};

/// What a rendering target must offer for the builders to lay out content.
pub trait Surface {
    fn add_text(&mut self, text: Text);
    fn add_image(&mut self, image: Image);
    fn add_stack(&mut self, stack: Stack);
    fn add_spacer(&mut self, length: Option<f32>);
}

impl Surface for Stack {
    fn add_text(&mut self, text: Text) {
        self.children.push(Element::Text(text));
    }

    fn add_image(&mut self, image: Image) {
        self.children.push(Element::Image(image));
    }

    fn add_stack(&mut self, stack: Stack) {
        self.children.push(Element::Stack(stack));
    }

    fn add_spacer(&mut self, length: Option<f32>) {
        self.children.push(Element::Spacer { length });
    }
}

impl Surface for Widget {
    fn add_text(&mut self, text: Text) {
        self.root.add_text(text);
    }

    fn add_image(&mut self, image: Image) {
        self.root.add_image(image);
    }

    fn add_stack(&mut self, stack: Stack) {
        self.root.add_stack(stack);
    }

    fn add_spacer(&mut self, length: Option<f32>) {
        self.root.add_spacer(length);
    }
}

/// Each addition becomes one cell. Rows have no free space, so spacers are
/// dropped.
impl Surface for TableRow {
    fn add_text(&mut self, text: Text) {
        self.cells.push(Cell {
            width_weight: 1,
            content: Element::Text(text),
        });
    }

    fn add_image(&mut self, image: Image) {
        self.cells.push(Cell {
            width_weight: 1,
            content: Element::Image(image),
        });
    }

    fn add_stack(&mut self, stack: Stack) {
        self.cells.push(Cell {
            width_weight: 1,
            content: Element::Stack(stack),
        });
    }

    fn add_spacer(&mut self, _length: Option<f32>) {}
}
