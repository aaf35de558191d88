//! Generated fixture models, one module per artifact package.

macro_rules! artifact {
    ($name:ident, $file:literal) => {
        pub mod $name {
            include!(concat!(env!("OUT_DIR"), "/", $file));
        }
    };
}

artifact!(widgets, "widget_domain.rs");
artifact!(widgets_store, "widget_storage.rs");
artifact!(widgets_api, "widget_api.rs");

artifact!(gadgets, "gadget_domain.rs");
artifact!(gadgets_store, "gadget_storage.rs");
artifact!(gadgets_api, "gadget_api.rs");

artifact!(empties, "empty_domain.rs");
artifact!(empties_store, "empty_storage.rs");
artifact!(empties_api, "empty_api.rs");

artifact!(results, "result_domain.rs");
artifact!(results_store, "result_storage.rs");
artifact!(results_api, "result_api.rs");
