use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Value of a path parameter such as `:id`; empty when absent
pub fn use_route_param(name: &'static str) -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get(name).unwrap_or_default()))
}
