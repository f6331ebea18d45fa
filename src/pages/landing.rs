use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::faq::{FaqEntry, FaqList};

const NAV: [(&str, &str); 6] = [
    ("#hero", "Trang chủ"),
    ("#services", "Dịch vụ"),
    ("#portfolio", "Portfolio"),
    ("#pricing", "Bảng giá"),
    ("#faq", "FAQ"),
    ("#contact", "Liên hệ"),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Bao lâu thì landing page hoàn thành?",
            answer: "Thông thường từ 5 đến 7 ngày làm việc kể từ khi chốt nội dung và thiết kế.",
        },
        FaqEntry {
            question: "Tôi có thể tự chỉnh sửa nội dung không?",
            answer: "Có. Mỗi trang đều đi kèm hướng dẫn chỉnh sửa và một buổi bàn giao trực tuyến.",
        },
        FaqEntry {
            question: "Chi phí đã bao gồm tên miền và hosting chưa?",
            answer: "Gói Chuyên nghiệp và Doanh nghiệp đã bao gồm tên miền và hosting năm đầu tiên.",
        },
        FaqEntry {
            question: "Có hỗ trợ sau khi bàn giao không?",
            answer: "Chúng tôi bảo hành 12 tháng và phản hồi yêu cầu hỗ trợ trong vòng 24 giờ.",
        },
    ]
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header id="header" class="header">
            <div class="container header-inner">
                <a href="#hero" class="logo">{"Landing"}<span>{"Pro"}</span></a>
                <nav class="nav-menu">
                    { for NAV.iter().map(|(href, label)| html! {
                        <a href={*href}>{*label}</a>
                    }) }
                </nav>
                <button class="menu-toggle" aria-label="Mở menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <div class="scroll-progress"></div>
            <Header />

            <section id="hero" class="section hero">
                <div class="parallax hero-shape shape-one" data-speed="0.3"></div>
                <div class="parallax hero-shape shape-two" data-speed="0.6"></div>
                <div class="container hero-content">
                    <h1 class="typing-effect" data-text="Landing page bán hàng hiệu quả">
                        {"Landing page bán hàng hiệu quả"}
                    </h1>
                    <p class="hero-lead">
                        {"Thiết kế nhanh, tối ưu chuyển đổi, sẵn sàng cho mọi thiết bị."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">{"Nhận tư vấn miễn phí"}</a>
                        <a href="#portfolio" class="btn btn-ghost">{"Xem dự án"}</a>
                    </div>
                    <div class="hero-stats">
                        <div class="stat">
                            <span class="stat-number" data-target="150" data-suffix="+">{"0"}</span>
                            <span class="stat-label">{"Dự án"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-number" data-target="98" data-suffix="%">{"0"}</span>
                            <span class="stat-label">{"Khách hài lòng"}</span>
                        </div>
                        <div class="stat">
                            <span data-count="12000" data-suffix="+">{"0"}</span>
                            <span class="stat-label">{"Khách hàng tiềm năng mỗi tháng"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section id="services" class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Dịch vụ"}</h2>
                        <p>{"Mọi thứ bạn cần để ra mắt một chiến dịch."}</p>
                    </div>
                    <div class="services-grid">
                        <div class="service-card"><h3>{"Thiết kế UI/UX"}</h3><p>{"Giao diện rõ ràng, dẫn dắt người xem tới hành động."}</p></div>
                        <div class="service-card"><h3>{"Phát triển"}</h3><p>{"Tải nhanh, chuẩn SEO, đo lường đầy đủ."}</p></div>
                        <div class="service-card"><h3>{"Nội dung"}</h3><p>{"Viết nội dung bán hàng theo giọng thương hiệu."}</p></div>
                        <div class="service-card"><h3>{"Tối ưu chuyển đổi"}</h3><p>{"Thử nghiệm A/B và báo cáo hàng tuần."}</p></div>
                    </div>
                </div>
            </section>

            <section id="portfolio" class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Portfolio"}</h2>
                        <p>{"Một vài dự án gần đây."}</p>
                    </div>
                    <div class="portfolio-grid">
                        <figure class="portfolio-item">
                            <img data-src="/assets/portfolio-coffee.jpg" alt="Chuỗi cà phê" />
                            <figcaption>{"Chuỗi cà phê"}</figcaption>
                        </figure>
                        <figure class="portfolio-item">
                            <img data-src="/assets/portfolio-edu.jpg" alt="Trung tâm tiếng Anh" />
                            <figcaption>{"Trung tâm tiếng Anh"}</figcaption>
                        </figure>
                        <figure class="portfolio-item">
                            <img data-src="/assets/portfolio-realestate.jpg" alt="Dự án bất động sản" />
                            <figcaption>{"Dự án bất động sản"}</figcaption>
                        </figure>
                    </div>
                </div>
            </section>

            <section id="pricing" class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Bảng giá"}</h2>
                        <p>{"Minh bạch, không phí ẩn."}</p>
                    </div>
                    <div class="pricing-grid">
                        <div class="pricing-card">
                            <h3>{"Cơ bản"}</h3>
                            <p class="price"><span data-count="3000000">{"0"}</span>{"đ"}</p>
                            <a href="#contact" class="btn btn-ghost">{"Chọn gói"}</a>
                        </div>
                        <div class="pricing-card featured">
                            <h3>{"Chuyên nghiệp"}</h3>
                            <p class="price"><span data-count="7500000">{"0"}</span>{"đ"}</p>
                            <a href="#contact" class="btn btn-primary">{"Chọn gói"}</a>
                        </div>
                        <div class="pricing-card">
                            <h3>{"Doanh nghiệp"}</h3>
                            <p class="price"><span data-count="15000000">{"0"}</span>{"đ"}</p>
                            <a href="#contact" class="btn btn-ghost">{"Chọn gói"}</a>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Khách hàng nói gì"}</h2>
                    </div>
                    <div class="testimonials-grid">
                        <blockquote class="testimonial-card">{"“Tỷ lệ chuyển đổi tăng gấp đôi sau hai tuần.”"}</blockquote>
                        <blockquote class="testimonial-card">{"“Làm việc nhanh, hỗ trợ rất nhiệt tình.”"}</blockquote>
                    </div>
                </div>
            </section>

            <section id="faq" class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Câu hỏi thường gặp"}</h2>
                    </div>
                    <FaqList entries={faq_entries()} />
                </div>
            </section>

            <section id="contact" class="section section-alt">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Liên hệ"}</h2>
                        <p>{"Để lại thông tin, chúng tôi sẽ gọi lại cho bạn."}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© LandingPro"}</p>
                    <a href="#">{"Lên đầu trang"}</a>
                </div>
            </footer>

            <style>
                {r#"
                * { box-sizing: border-box; }
                html, body { margin: 0; }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2933;
                    background: #ffffff;
                }
                .container { max-width: 1140px; margin: 0 auto; padding: 0 1.5rem; }
                .scroll-progress {
                    position: fixed; top: 0; left: 0; height: 3px; width: 0;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    z-index: 1001;
                }

                .header {
                    position: fixed; top: 0; left: 0; right: 0;
                    height: 80px; z-index: 1000;
                    background: transparent;
                    transition: transform 0.3s ease, background 0.3s ease, height 0.3s ease, box-shadow 0.3s ease;
                }
                .header--sticky {
                    height: 64px;
                    background: rgba(255, 255, 255, 0.96);
                    box-shadow: 0 2px 16px rgba(15, 23, 42, 0.08);
                }
                .header--hidden { transform: translateY(-100%); }
                .header-inner { height: 100%; display: flex; align-items: center; justify-content: space-between; }
                .logo { font-weight: 800; font-size: 1.4rem; color: #0f172a; text-decoration: none; }
                .logo span { color: #2563eb; }
                .nav-menu { display: flex; gap: 1.75rem; }
                .nav-menu a { color: #334155; text-decoration: none; font-weight: 500; }
                .nav-menu a.active { color: #2563eb; }
                .menu-toggle { display: none; background: none; border: 0; cursor: pointer; padding: 0.5rem; }
                .menu-toggle span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #0f172a; transition: transform 0.3s ease, opacity 0.3s ease; }
                .menu-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .menu-toggle.active span:nth-child(2) { opacity: 0; }
                .menu-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

                @media (max-width: 768px) {
                    .menu-toggle { display: block; }
                    .nav-menu {
                        position: fixed; top: 0; right: 0; bottom: 0; width: 75%;
                        flex-direction: column; padding: 6rem 2rem 2rem;
                        background: #ffffff; box-shadow: -8px 0 24px rgba(15, 23, 42, 0.12);
                        transform: translateX(100%); transition: transform 0.3s ease;
                    }
                    .nav-menu.active { transform: translateX(0); }
                    .menu-toggle { position: relative; z-index: 1; }
                }

                .section { padding: 6rem 0; position: relative; overflow: hidden; }
                .section-alt { background: #f8fafc; }
                .section-header { text-align: center; margin-bottom: 3rem; }
                .section-header h2 { font-size: 2.2rem; margin: 0 0 0.5rem; }

                .hero { min-height: 100vh; display: flex; align-items: center; padding-top: 120px; }
                .hero h1 { font-size: 3rem; max-width: 720px; min-height: 3.6rem; }
                .hero-lead { font-size: 1.2rem; color: #475569; }
                .hero-actions { display: flex; gap: 1rem; margin: 2rem 0; }
                .hero-stats { display: flex; gap: 3rem; }
                .stat-number, [data-count] { font-size: 2rem; font-weight: 800; color: #2563eb; }
                .stat-label { display: block; color: #64748b; }
                .hero-shape { position: absolute; border-radius: 50%; opacity: 0.15; pointer-events: none; }
                .shape-one { width: 420px; height: 420px; top: 10%; right: -120px; background: #2563eb; }
                .shape-two { width: 260px; height: 260px; bottom: 5%; left: -80px; background: #7c3aed; }

                .btn { display: inline-block; padding: 0.85rem 1.6rem; border-radius: 8px; font-weight: 600; text-decoration: none; border: 0; cursor: pointer; }
                .btn-primary { background: #2563eb; color: #ffffff; }
                .btn-ghost { border: 1px solid #2563eb; color: #2563eb; background: transparent; }
                .btn.loading, .btn:disabled { opacity: 0.7; cursor: wait; }

                .services-grid, .pricing-grid, .portfolio-grid, .testimonials-grid, .values-grid {
                    display: grid; gap: 1.5rem;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                }
                .service-card, .pricing-card, .testimonial-card {
                    background: #ffffff; border-radius: 12px; padding: 2rem; margin: 0;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.06);
                    transition: transform 0.2s ease;
                }
                .pricing-card.featured { border: 2px solid #2563eb; }
                .price { font-size: 1.4rem; }
                .portfolio-item { margin: 0; }
                .portfolio-item img { width: 100%; border-radius: 12px; background: #e2e8f0; min-height: 200px; }

                .img-reveal { opacity: 0; transition: opacity 0.6s ease; }
                .img-reveal.loaded { opacity: 1; }

                .animate { opacity: 0; transition: opacity 0.6s ease, transform 0.6s ease; }
                .animate.fade-in-up { transform: translateY(30px); }
                .animate.in-view { opacity: 1; transform: none; }
                .delay-1 { transition-delay: 0.05s; }
                .delay-2 { transition-delay: 0.1s; }
                .delay-3 { transition-delay: 0.15s; }
                .delay-4 { transition-delay: 0.2s; }
                .delay-5 { transition-delay: 0.25s; }
                .delay-6 { transition-delay: 0.3s; }

                .faq-list { max-width: 760px; margin: 0 auto; }
                .faq-item { border-bottom: 1px solid #e2e8f0; }
                .faq-question {
                    width: 100%; display: flex; justify-content: space-between; align-items: center;
                    padding: 1.25rem 0; background: none; border: 0; font-size: 1.05rem; font-weight: 600; cursor: pointer; text-align: left;
                }
                .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; color: #475569; }
                .faq-item.active .faq-answer { max-height: 240px; }

                .contact-form { max-width: 760px; margin: 0 auto; display: grid; gap: 1.25rem; }
                .form-row { display: grid; gap: 1.25rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
                .form-group { display: flex; flex-direction: column; gap: 0.4rem; }
                .form-group input, .form-group select, .form-group textarea {
                    padding: 0.8rem 1rem; border: 1px solid #cbd5e1; border-radius: 8px; font: inherit;
                }

                .footer { padding: 2rem 0; background: #0f172a; color: #cbd5e1; }
                .footer .container { display: flex; justify-content: space-between; }
                .footer a { color: #cbd5e1; }
                "#}
            </style>
        </div>
    }
}
