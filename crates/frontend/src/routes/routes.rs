use crate::dashboards::CandidateDashboard;
use crate::domain::a001_candidate::ui::portal::CandidatePortalPage;
use crate::domain::a002_report::ui::category::CategoryReportPage;
use crate::domain::a002_report::ui::details::ReportPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u501_submit_candidate::SubmitCandidatePage;
use crate::usecases::u502_candidate_consent::CandidateConsentPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client-side route table. Category sub-reports share one route and are
/// resolved by slug, so an unknown slug renders the not-found page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/submit-candidate") view=SubmitCandidatePage />
                <Route path=path!("/dashboard") view=CandidateDashboard />
                <Route path=path!("/report/:id") view=ReportPage />
                <Route path=path!("/report/:id/:section") view=CategoryReportPage />
                <Route path=path!("/candidate/:id") view=CandidateConsentPage />
                <Route path=path!("/candidate-portal/:id") view=CandidatePortalPage />
            </Routes>
        </Router>
    }
}
