use charming::{
    component::{
        Axis, DataView, Feature, Grid, Legend, LegendSelectedMode, LegendType, Restore,
        SaveAsImage, Title, Toolbox,
    },
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, ItemStyle, Label,
        LabelPosition, LineStyle, LineStyleType, NameLocation, Orient, SplitLine, Symbol,
        TextAlign, TextStyle, Tooltip,
    },
    series::{Bar, Line, Scatter},
    Chart,
};

pub struct LabChart {
    pub inner: Chart,
}

const AXIS_TEXT_SIZE: u32 = 16;

impl LabChart {
    /// Create a new `LabChart` with default tooltip, legend, grid, and toolbox.
    pub fn new(title: &str, subtext: &str, dark: bool) -> Self {
        let chart = Chart::new()
            .title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(24).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(14).line_height(20))
                    .left("50%")
                    .top("1%"),
            )
            .tooltip(Tooltip::new().axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)))
            .legend(
                Legend::new()
                    .show(true)
                    .right("2%")
                    .top("middle")
                    .orient(Orient::Vertical)
                    .selected_mode(LegendSelectedMode::Multiple)
                    .text_style(TextStyle::new().font_size(12))
                    .padding(10)
                    .item_gap(10)
                    .item_width(25)
                    .item_height(14)
                    .type_(LegendType::Scroll),
            )
            .grid(
                Grid::new()
                    .left("5%")
                    .right("20%")
                    .top("16%")
                    .bottom("8%"),
            )
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart
        };

        Self { inner: chart }
    }

    /// Configure the X axis (category axis).
    pub fn with_category_x_axis(mut self, axis_label: &str, categories: Vec<String>) -> Self {
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .data(categories)
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure a linear Y axis for e.g. throughput in MB/s.
    pub fn with_y_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .position("left")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure a logarithmic Y axis for series spanning orders of magnitude.
    pub fn with_log_y_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Log)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .position("left")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Add a line series with one value per category.
    pub fn add_line_series(mut self, name: &str, data: Vec<f64>, symbol: Symbol, color: &str) -> Self {
        let line = Line::new()
            .name(name)
            .data(data)
            .symbol(symbol)
            .symbol_size(8.0)
            .line_style(LineStyle::new().width(3.0))
            .item_style(ItemStyle::new().color(color));

        self.inner = self.inner.series(line);
        self
    }

    /// Add a single highlighted point at a category index, e.g. an optimum
    /// marker.
    pub fn add_point(mut self, name: &str, index: usize, value: f64, color: &str) -> Self {
        let point = Scatter::new()
            .name(name)
            .data(vec![vec![index as f64, value]])
            .symbol_size(14.0)
            .item_style(ItemStyle::new().color(color));

        self.inner = self.inner.series(point);
        self
    }

    /// Add a dashed horizontal reference line spanning all categories.
    pub fn add_reference_line(mut self, name: &str, value: f64, categories: usize, color: &str) -> Self {
        let line = Line::new()
            .name(name)
            .data(vec![value; categories])
            .show_symbol(false)
            .line_style(
                LineStyle::new()
                    .width(2.0)
                    .type_(LineStyleType::Dashed)
                    .opacity(0.8),
            )
            .item_style(ItemStyle::new().color(color))
            .emphasis(Emphasis::new());

        self.inner = self.inner.series(line);
        self
    }

    /// Add a bar series with per-bar styling. When `labeled` is set, each
    /// bar shows its item name above itself, so callers put the preformatted
    /// value text into the item names.
    pub fn add_bar_series(mut self, name: &str, items: Vec<DataPointItem>, labeled: bool) -> Self {
        let mut bar = Bar::new().name(name).data(items);
        if labeled {
            bar = bar.label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Top)
                    .formatter("{b}"),
            );
        }

        self.inner = self.inner.series(bar);
        self
    }
}
